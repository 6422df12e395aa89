// server/src/flows/mod.rs

//! The backend's multi-step workflows, built on `justo::flow`.

use crate::errors::AppError;
use justo::FlowRegistry;

pub mod contexts;

pub mod checkout_flow;
pub mod login_flow;
pub mod password_flow;
pub mod register_flow;

/// Registers every flow. Called once while building `AppState`.
pub fn register_all_flows(registry: &FlowRegistry<AppError>) {
  register_flow::register_register_flow(registry);
  login_flow::register_login_flow(registry);
  password_flow::register_change_password_flow(registry);
  checkout_flow::register_checkout_flow(registry);
  tracing::info!("All application flows registered.");
}
