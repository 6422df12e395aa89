// core/src/flow/registry.rs

use super::control::FlowOutcome;
use super::definition::Flow;
use super::shared::Shared;
use crate::error::FlowError;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{event, Level};

#[async_trait]
trait ErasedFlow<AppErr>: Send + Sync
where
  AppErr: std::error::Error + Send + Sync + 'static,
{
  async fn run_erased(&self, ctx: Box<dyn Any + Send>) -> Result<FlowOutcome, AppErr>;
}

struct TypedFlow<TData, AppErr>
where
  TData: 'static + Send + Sync,
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  flow: Flow<TData, AppErr>,
}

#[async_trait]
impl<TData, AppErr> ErasedFlow<AppErr> for TypedFlow<TData, AppErr>
where
  TData: 'static + Send + Sync,
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  async fn run_erased(&self, ctx: Box<dyn Any + Send>) -> Result<FlowOutcome, AppErr> {
    let typed = ctx.downcast::<Shared<TData>>().map_err(|_| {
      AppErr::from(FlowError::TypeMismatch {
        expected_type: std::any::type_name::<Shared<TData>>().to_string(),
      })
    })?;
    self.flow.run(*typed).await
  }
}

/// Registry of flows keyed by their context type.
///
/// One context type maps to one flow, so running a flow is just handing the
/// registry a context: `registry.run(Shared::new(SignupContext { .. }))`.
pub struct FlowRegistry<AppErr = FlowError>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  flows: RwLock<HashMap<TypeId, Arc<dyn ErasedFlow<AppErr>>>>,
}

impl<AppErr> Default for FlowRegistry<AppErr>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<AppErr> FlowRegistry<AppErr>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub fn new() -> Self {
    Self {
      flows: RwLock::new(HashMap::new()),
    }
  }

  /// Registers `flow`, replacing any flow previously registered for `TData`.
  pub fn register<TData>(&self, flow: Flow<TData, AppErr>)
  where
    TData: 'static + Send + Sync,
  {
    event!(Level::DEBUG, flow = %flow.name(), context = %std::any::type_name::<TData>(), "Registering flow.");
    self
      .flows
      .write()
      .insert(TypeId::of::<TData>(), Arc::new(TypedFlow { flow }));
  }

  pub fn is_registered<TData: 'static + Send + Sync>(&self) -> bool {
    self.flows.read().contains_key(&TypeId::of::<TData>())
  }

  /// Runs the flow registered for `TData` against `ctx`.
  pub async fn run<TData>(&self, ctx: Shared<TData>) -> Result<FlowOutcome, AppErr>
  where
    TData: 'static + Send + Sync,
  {
    let runner = {
      let flows = self.flows.read();
      flows.get(&TypeId::of::<TData>()).cloned()
    }
    .ok_or_else(|| {
      let context_type = std::any::type_name::<TData>();
      event!(Level::ERROR, context = %context_type, "No flow registered.");
      AppErr::from(FlowError::NotRegistered {
        context_type: context_type.to_string(),
      })
    })?;

    runner.run_erased(Box::new(ctx)).await
  }
}
