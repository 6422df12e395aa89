// core/src/flow/execution.rs

use super::control::{FlowControl, FlowOutcome};
use super::definition::Flow;
use super::shared::Shared;
use crate::error::FlowError;
use tracing::{event, instrument, Instrument, Level};

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Runs every step in order against `ctx`.
  ///
  /// Skipped steps and handler-less optional steps are passed over. A
  /// non-optional step without handlers fails the run with
  /// [`FlowError::HandlerMissing`]. The first handler error aborts the run and
  /// is returned as is.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(flow = %self.name, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, ctx: Shared<TData>) -> Result<FlowOutcome, Err> {
    event!(Level::DEBUG, "Flow starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();

      if let Some(skip_if) = &step_def.skip_if {
        if skip_if(ctx.clone()) {
          event!(Level::DEBUG, step = step_name, "Step skipped.");
          continue;
        }
      }

      let handlers = match self.handlers.get(step_name) {
        Some(handlers) if !handlers.is_empty() => handlers,
        _ if step_def.optional => {
          event!(Level::DEBUG, step = step_name, "Optional step has no handlers.");
          continue;
        }
        _ => {
          event!(Level::ERROR, step = step_name, "Required step has no handlers.");
          return Err(Err::from(FlowError::HandlerMissing {
            flow: self.name.clone(),
            step_name: step_def.name.clone(),
          }));
        }
      };

      let step_span = tracing::info_span!("flow_step", step = step_name, step_index = step_idx);
      for handler in handlers {
        match handler(ctx.clone()).instrument(step_span.clone()).await {
          Ok(FlowControl::Continue) => {}
          Ok(FlowControl::Stop) => {
            event!(Level::INFO, step = step_name, "Flow stopped by handler.");
            return Ok(FlowOutcome::Stopped);
          }
          Err(e) => {
            event!(Level::WARN, step = step_name, error = %e, "Step handler failed.");
            return Err(e);
          }
        }
      }
    }

    event!(Level::DEBUG, "Flow completed.");
    Ok(FlowOutcome::Completed)
  }
}
