// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

/// Storage URL that keeps every document in process memory.
pub const MEMORY_DATABASE_URL: &str = "memory://";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// `memory://` or a `postgres://` connection string.
  pub database_url: String,
  pub token_secret: String,
  pub token_ttl_hours: i64,
  /// Seed the demo catalog into an empty store on startup.
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("BACKEND_PORT")
      .unwrap_or_else(|_| "5000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid BACKEND_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL").unwrap_or_else(|_| MEMORY_DATABASE_URL.to_string());
    let token_secret = get_env("TOKEN_SECRET").unwrap_or_else(|_| "your-secret-key".to_string());
    let token_ttl_hours = get_env("TOKEN_TTL_HOURS")
      .unwrap_or_else(|_| "24".to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid TOKEN_TTL_HOURS: {}", e)))?;
    if token_ttl_hours <= 0 {
      return Err(AppError::Config("TOKEN_TTL_HOURS must be positive".to_string()));
    }

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    if token_secret == "your-secret-key" {
      tracing::warn!("TOKEN_SECRET is not set; using the development default.");
    }
    tracing::info!(
      server_host = %server_host,
      server_port,
      in_memory = database_url == MEMORY_DATABASE_URL,
      seed_db,
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      token_secret,
      token_ttl_hours,
      seed_db,
    })
  }

  /// Configuration for tests and local runs: in-memory store, fixed secret.
  pub fn local(token_secret: impl Into<String>) -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 5000,
      database_url: MEMORY_DATABASE_URL.to_string(),
      token_secret: token_secret.into(),
      token_ttl_hours: 24,
      seed_db: false,
    }
  }
}
