// server/src/storage/postgres.rs

use super::{Collection, DocumentStore};
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{error, info, instrument};
use uuid::Uuid;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS documents (
  collection TEXT NOT NULL,
  id UUID NOT NULL,
  seq BIGSERIAL,
  body JSONB NOT NULL,
  PRIMARY KEY (collection, id)
)";

const CREATE_USER_EMAIL_INDEX: &str =
  "CREATE UNIQUE INDEX IF NOT EXISTS documents_user_email_key ON documents ((body ->> 'email')) WHERE collection = 'users'";

/// Unique violations become `Conflict`; everything else stays a database error.
fn conflict_or_sqlx(err: sqlx::Error, collection: Collection) -> AppError {
  match &err {
    sqlx::Error::Database(db) if db.is_unique_violation() => {
      AppError::Conflict(format!("{} document already exists", collection))
    }
    _ => AppError::Sqlx(err),
  }
}

/// Documents kept in one Postgres table, one JSONB body per row.
#[derive(Debug, Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  #[instrument(name = "PgStore::connect", skip(database_url), err(Display))]
  pub async fn connect(database_url: &str) -> Result<Self> {
    let pool = PgPool::connect(database_url).await.map_err(|e| {
      error!(error = %e, "Failed to connect to the database.");
      AppError::Sqlx(e)
    })?;
    info!("Successfully connected to the database.");
    let store = Self { pool };
    store.ensure_schema().await?;
    Ok(store)
  }

  pub async fn ensure_schema(&self) -> Result<()> {
    sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
    sqlx::query(CREATE_USER_EMAIL_INDEX).execute(&self.pool).await?;
    Ok(())
  }
}

#[async_trait]
impl DocumentStore for PgStore {
  async fn list(&self, collection: Collection) -> Result<Vec<Value>> {
    let rows: Vec<(Json<Value>,)> = sqlx::query_as("SELECT body FROM documents WHERE collection = $1 ORDER BY seq ASC")
      .bind(collection.as_str())
      .fetch_all(&self.pool)
      .await?;
    Ok(rows.into_iter().map(|(Json(body),)| body).collect())
  }

  async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>> {
    let row: Option<(Json<Value>,)> = sqlx::query_as("SELECT body FROM documents WHERE collection = $1 AND id = $2")
      .bind(collection.as_str())
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(row.map(|(Json(body),)| body))
  }

  async fn find_by(&self, collection: Collection, field: &str, value: &str) -> Result<Option<Value>> {
    let row: Option<(Json<Value>,)> = sqlx::query_as(
      "SELECT body FROM documents WHERE collection = $1 AND body ->> $2 = $3 ORDER BY seq ASC LIMIT 1",
    )
    .bind(collection.as_str())
    .bind(field)
    .bind(value)
    .fetch_optional(&self.pool)
    .await?;
    Ok(row.map(|(Json(body),)| body))
  }

  async fn insert(&self, collection: Collection, id: Uuid, body: Value) -> Result<()> {
    let result = sqlx::query(
      "INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3) ON CONFLICT (collection, id) DO NOTHING",
    )
    .bind(collection.as_str())
    .bind(id)
    .bind(Json(body))
    .execute(&self.pool)
    .await?;
    if result.rows_affected() == 0 {
      return Err(AppError::Conflict(format!("{} document {} already exists", collection, id)));
    }
    Ok(())
  }

  async fn insert_unique(&self, collection: Collection, id: Uuid, field: &str, body: Value) -> Result<()> {
    // The NOT EXISTS guard covers sequential inserts; concurrent user inserts
    // are caught by the email index.
    let result = sqlx::query(
      "INSERT INTO documents (collection, id, body)
       SELECT $1, $2, $3
       WHERE NOT EXISTS (SELECT 1 FROM documents WHERE collection = $1 AND body ->> $4 = $3 ->> $4)
       ON CONFLICT (collection, id) DO NOTHING",
    )
    .bind(collection.as_str())
    .bind(id)
    .bind(Json(body))
    .bind(field)
    .execute(&self.pool)
    .await
    .map_err(|e| conflict_or_sqlx(e, collection))?;
    if result.rows_affected() == 0 {
      return Err(AppError::Conflict(format!("{} document with that {} already exists", collection, field)));
    }
    Ok(())
  }

  async fn replace(&self, collection: Collection, id: Uuid, body: Value) -> Result<bool> {
    let result = sqlx::query("UPDATE documents SET body = $3 WHERE collection = $1 AND id = $2")
      .bind(collection.as_str())
      .bind(id)
      .bind(Json(body))
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
      .bind(collection.as_str())
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }
}
