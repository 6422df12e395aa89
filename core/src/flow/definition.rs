// core/src/flow/definition.rs

use super::control::FlowControl;
use super::shared::Shared;
use super::step::{SkipCondition, StepDef};
use crate::error::FlowError;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

/// Async handler attached to a step.
///
/// It owns a clone of the flow context, takes whatever locks it needs, drops
/// them before awaiting, and reports whether the flow should go on.
pub type StepHandler<TData, Err> =
  Box<dyn Fn(Shared<TData>) -> Pin<Box<dyn Future<Output = Result<FlowControl, Err>> + Send>> + Send + Sync>;

/// An ordered list of named steps over a context of type `TData`.
///
/// Handlers fail with the application's error type `Err`, which must be able to
/// absorb the engine's own [`FlowError`].
pub struct Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef<TData>>,
  pub(crate) handlers: HashMap<String, Vec<StepHandler<TData, Err>>>,
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Builds a flow from `(step name, optional, skip condition)` triples.
  pub fn new(name: impl Into<String>, step_defs: &[(&str, bool, Option<SkipCondition<TData>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(step_name, optional, skip_if)| StepDef {
        name: (*step_name).to_string(),
        optional: *optional,
        skip_if: skip_if.clone(),
      })
      .collect();

    Self {
      name: name.into(),
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Attaches a handler to an existing step. Handlers of one step run in the
  /// order they were attached.
  ///
  /// Panics when the step is not part of the flow: that is a wiring mistake
  /// made at startup, not a runtime condition.
  pub fn on<F, Fut>(&mut self, step_name: &str, handler: F)
  where
    F: Fn(Shared<TData>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<FlowControl, Err>> + Send + 'static,
  {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("flow '{}' has no step named '{}'", self.name, step_name);
    }
    let boxed: StepHandler<TData, Err> = Box::new(
      move |ctx| -> Pin<Box<dyn Future<Output = Result<FlowControl, Err>> + Send>> { Box::pin(handler(ctx)) },
    );
    self.handlers.entry(step_name.to_string()).or_default().push(boxed);
  }

  /// Inserts a new step right after an existing one.
  pub fn insert_after(&mut self, existing: &str, new_step: &str, optional: bool) -> Result<(), FlowError> {
    if self.steps.iter().any(|s| s.name == new_step) {
      return Err(FlowError::DuplicateStep {
        flow: self.name.clone(),
        step_name: new_step.to_string(),
      });
    }
    let idx = self
      .steps
      .iter()
      .position(|s| s.name == existing)
      .ok_or_else(|| FlowError::StepNotFound {
        flow: self.name.clone(),
        step_name: existing.to_string(),
      })?;
    self.steps.insert(
      idx + 1,
      StepDef {
        name: new_step.to_string(),
        optional,
        skip_if: None,
      },
    );
    Ok(())
  }
}
