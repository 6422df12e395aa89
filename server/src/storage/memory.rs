// server/src/storage/memory.rs

use super::{Collection, DocumentStore};
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Process-local store. Documents keep their insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
  collections: RwLock<HashMap<Collection, Vec<(Uuid, Value)>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl DocumentStore for MemoryStore {
  async fn list(&self, collection: Collection) -> Result<Vec<Value>> {
    let guard = self.collections.read();
    Ok(
      guard
        .get(&collection)
        .map(|docs| docs.iter().map(|(_, body)| body.clone()).collect())
        .unwrap_or_default(),
    )
  }

  async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>> {
    let guard = self.collections.read();
    Ok(
      guard
        .get(&collection)
        .and_then(|docs| docs.iter().find(|(doc_id, _)| *doc_id == id))
        .map(|(_, body)| body.clone()),
    )
  }

  async fn find_by(&self, collection: Collection, field: &str, value: &str) -> Result<Option<Value>> {
    let guard = self.collections.read();
    Ok(
      guard
        .get(&collection)
        .and_then(|docs| {
          docs
            .iter()
            .find(|(_, body)| body.get(field).and_then(Value::as_str) == Some(value))
        })
        .map(|(_, body)| body.clone()),
    )
  }

  async fn insert(&self, collection: Collection, id: Uuid, body: Value) -> Result<()> {
    let mut guard = self.collections.write();
    let docs = guard.entry(collection).or_default();
    if docs.iter().any(|(doc_id, _)| *doc_id == id) {
      return Err(AppError::Conflict(format!("{} document {} already exists", collection, id)));
    }
    docs.push((id, body));
    Ok(())
  }

  async fn insert_unique(&self, collection: Collection, id: Uuid, field: &str, body: Value) -> Result<()> {
    let value = body.get(field).and_then(Value::as_str).map(str::to_owned);
    let mut guard = self.collections.write();
    let docs = guard.entry(collection).or_default();
    if docs.iter().any(|(doc_id, _)| *doc_id == id) {
      return Err(AppError::Conflict(format!("{} document {} already exists", collection, id)));
    }
    if let Some(value) = value {
      if docs
        .iter()
        .any(|(_, existing)| existing.get(field).and_then(Value::as_str) == Some(value.as_str()))
      {
        return Err(AppError::Conflict(format!("{} document with {} {} already exists", collection, field, value)));
      }
    }
    docs.push((id, body));
    Ok(())
  }

  async fn replace(&self, collection: Collection, id: Uuid, body: Value) -> Result<bool> {
    let mut guard = self.collections.write();
    match guard
      .get_mut(&collection)
      .and_then(|docs| docs.iter_mut().find(|(doc_id, _)| *doc_id == id))
    {
      Some((_, existing)) => {
        *existing = body;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool> {
    let mut guard = self.collections.write();
    let Some(docs) = guard.get_mut(&collection) else {
      return Ok(false);
    };
    let before = docs.len();
    docs.retain(|(doc_id, _)| *doc_id != id);
    Ok(docs.len() != before)
  }
}
