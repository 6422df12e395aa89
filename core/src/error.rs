// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures of the domain operations: catalog lookups, checkout, ledger
/// mutations and the demo session gateway.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JustoError {
  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: String },

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Unauthorized: {0}")]
  Unauthorized(String),

  /// Every problem found while validating one request, in the order found.
  #[error("Validation failed: {}", .0.join("; "))]
  Validation(Vec<String>),
}

impl JustoError {
  pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
    JustoError::NotFound {
      entity,
      id: id.to_string(),
    }
  }

  pub fn invalid(message: impl Into<String>) -> Self {
    JustoError::Validation(vec![message.into()])
  }
}

pub type JustoResult<T, E = JustoError> = std::result::Result<T, E>;

/// Failures raised by the flow engine itself, as opposed to its step handlers.
#[derive(Debug, Error)]
pub enum FlowError {
  #[error("Step '{step_name}' not found in flow '{flow}'")]
  StepNotFound { flow: String, step_name: String },

  #[error("Step '{step_name}' already exists in flow '{flow}'")]
  DuplicateStep { flow: String, step_name: String },

  #[error("Handler missing for required step '{step_name}' in flow '{flow}'")]
  HandlerMissing { flow: String, step_name: String },

  #[error("No flow registered for context type {context_type}")]
  NotRegistered { context_type: String },

  #[error("Context type mismatch (expected {expected_type})")]
  TypeMismatch { expected_type: String },

  #[error("Step handler failed: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },
}

impl From<AnyhowError> for FlowError {
  fn from(source: AnyhowError) -> Self {
    FlowError::Handler { source }
  }
}
