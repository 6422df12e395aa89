// server/src/storage/mod.rs

//! Document storage behind the REST backend.
//!
//! Every record lives as one JSON document in a named collection. The backend
//! only ever touches one document per operation, so the trait stays small.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::config::MEMORY_DATABASE_URL;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
  Users,
  Restaurants,
  MenuItems,
}

impl Collection {
  pub fn as_str(&self) -> &'static str {
    match self {
      Collection::Users => "users",
      Collection::Restaurants => "restaurants",
      Collection::MenuItems => "menu_items",
    }
  }
}

impl fmt::Display for Collection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Every document of the collection, oldest first.
  async fn list(&self, collection: Collection) -> Result<Vec<Value>>;

  async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>>;

  /// First document whose top-level string `field` equals `value`.
  async fn find_by(&self, collection: Collection, field: &str, value: &str) -> Result<Option<Value>>;

  /// Stores a new document. Fails with `Conflict` when the id is taken.
  async fn insert(&self, collection: Collection, id: Uuid, body: Value) -> Result<()>;

  /// Stores a new document unless another one already has `field == value`.
  /// Fails with `Conflict` on either the id or the field.
  async fn insert_unique(&self, collection: Collection, id: Uuid, field: &str, body: Value) -> Result<()>;

  /// Overwrites an existing document; `false` when there was none.
  async fn replace(&self, collection: Collection, id: Uuid, body: Value) -> Result<bool>;

  async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool>;
}

/// Opens the store named by `database_url`: `memory://` or a Postgres URL.
pub async fn connect(database_url: &str) -> Result<Arc<dyn DocumentStore>> {
  if database_url == MEMORY_DATABASE_URL {
    tracing::info!("Using the in-memory document store.");
    return Ok(Arc::new(MemoryStore::new()));
  }
  if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
    return Ok(Arc::new(PgStore::connect(database_url).await?));
  }
  Err(AppError::Config(format!(
    "DATABASE_URL must be {} or a postgres:// URL",
    MEMORY_DATABASE_URL
  )))
}

// Typed helpers over the JSON documents.

pub async fn load_all<T: DeserializeOwned>(store: &dyn DocumentStore, collection: Collection) -> Result<Vec<T>> {
  store
    .list(collection)
    .await?
    .into_iter()
    .map(|doc| serde_json::from_value(doc).map_err(Into::into))
    .collect()
}

pub async fn load<T: DeserializeOwned>(store: &dyn DocumentStore, collection: Collection, id: Uuid) -> Result<Option<T>> {
  match store.get(collection, id).await? {
    Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
    None => Ok(None),
  }
}

pub async fn find<T: DeserializeOwned>(
  store: &dyn DocumentStore,
  collection: Collection,
  field: &str,
  value: &str,
) -> Result<Option<T>> {
  match store.find_by(collection, field, value).await? {
    Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
    None => Ok(None),
  }
}

pub async fn insert<T: Serialize>(store: &dyn DocumentStore, collection: Collection, id: Uuid, record: &T) -> Result<()> {
  store.insert(collection, id, serde_json::to_value(record)?).await
}

pub async fn insert_unique<T: Serialize>(
  store: &dyn DocumentStore,
  collection: Collection,
  id: Uuid,
  field: &str,
  record: &T,
) -> Result<()> {
  store.insert_unique(collection, id, field, serde_json::to_value(record)?).await
}

pub async fn replace<T: Serialize>(store: &dyn DocumentStore, collection: Collection, id: Uuid, record: &T) -> Result<bool> {
  store.replace(collection, id, serde_json::to_value(record)?).await
}
