// server/src/errors.rs

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use justo::{FlowError, JustoError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Every problem found with the request, reported together.
  #[error("Validation Error: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {0}")]
  Storage(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Flow Error: {source}")]
  Flow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),

  /// A flow stopped early where the caller needed it to complete.
  #[error("Flow was halted by a step.")]
  FlowHalted,
}

impl AppError {
  pub fn invalid(message: impl Into<String>) -> Self {
    AppError::Validation(vec![message.into()])
  }
}

impl From<JustoError> for AppError {
  fn from(err: JustoError) -> Self {
    match err {
      JustoError::NotFound { .. } => AppError::NotFound(err.to_string()),
      JustoError::Conflict(m) => AppError::Conflict(m),
      JustoError::Unauthorized(m) => AppError::Auth(m),
      JustoError::Validation(errors) => AppError::Validation(errors),
    }
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
    AppError::Storage(format!("stored document could not be decoded: {}", err))
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(details) => {
        tracing::warn!(application_error = %self, "Responding with validation error");
        HttpResponse::BadRequest().json(json!({"error": details.join("; "), "details": details}))
      }
      AppError::Conflict(m) => {
        tracing::warn!(application_error = %self, "Responding with conflict");
        HttpResponse::BadRequest().json(json!({"error": m}))
      }
      AppError::Auth(m) => {
        tracing::warn!(application_error = %self, "Responding with auth failure");
        HttpResponse::Unauthorized().json(json!({"error": m}))
      }
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(_) | AppError::Storage(_) | AppError::Sqlx(_) | AppError::Internal(_) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Internal server error"}))
      }
      AppError::Flow { source } => {
        tracing::error!(flow_error = ?source, "Flow error details");
        HttpResponse::InternalServerError().json(json!({"error": "Workflow processing error"}))
      }
      AppError::FlowHalted => {
        tracing::error!("Flow halted unexpectedly");
        HttpResponse::InternalServerError().json(json!({"error": "Request processing was halted"}))
      }
    }
  }
}

/// Turns malformed JSON bodies into the standard 400 error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::invalid(format!("Invalid request body: {}", err)).into()
}

/// Same for query strings that do not deserialize.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::invalid(format!("Invalid query string: {}", err)).into()
}

/// Path segments that do not parse (e.g. a malformed id) name no resource.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
  AppError::NotFound(format!("No resource at {}: {}", req.path(), err)).into()
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
