// server/src/state.rs

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::token::TokenSigner;
use crate::storage::DocumentStore;
use justo::{FlowRegistry, Ledger, Shared};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn DocumentStore>,
  /// Orders of this process. Queue numbers are assigned under its write lock.
  pub ledger: Shared<Ledger>,
  pub flows: Arc<FlowRegistry<AppError>>,
  pub tokens: TokenSigner,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// State with an empty ledger and every flow registered.
  pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
    let state = Self {
      store,
      ledger: Shared::new(Ledger::new()),
      flows: Arc::new(FlowRegistry::new()),
      tokens: TokenSigner::new(&config.token_secret, config.token_ttl_hours),
      config: Arc::new(config),
    };
    crate::flows::register_all_flows(&state.flows);
    state
  }
}
