// server/src/repositories/users.rs

use crate::errors::{AppError, Result};
use crate::storage::{self, Collection, DocumentStore};
use chrono::{DateTime, Utc};
use justo::models::User;
use justo::JustoError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
  #[serde(flatten)]
  pub user: User,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// The stored form of an [`Account`]; the hash never leaves this module's
/// callers in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
  #[serde(flatten)]
  pub account: Account,
  pub password_hash: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
  pub name: Option<String>,
  pub phone: Option<String>,
}

fn not_found(id: Uuid) -> AppError {
  JustoError::not_found("User", id).into()
}

pub async fn find_by_email(store: &dyn DocumentStore, email: &str) -> Result<Option<AccountRecord>> {
  storage::find(store, Collection::Users, "email", email).await
}

pub async fn get(store: &dyn DocumentStore, id: Uuid) -> Result<AccountRecord> {
  storage::load(store, Collection::Users, id).await?.ok_or_else(|| not_found(id))
}

/// Stores a new account. The store enforces one account per email, so a
/// registration racing another for the same address still gets `Conflict`.
pub async fn insert(store: &dyn DocumentStore, record: &AccountRecord) -> Result<()> {
  storage::insert_unique(store, Collection::Users, record.account.user.id, "email", record)
    .await
    .map_err(|err| match err {
      AppError::Conflict(_) => AppError::Conflict("User already exists".to_string()),
      other => other,
    })
}

pub async fn update_profile(store: &dyn DocumentStore, id: Uuid, update: ProfileUpdate) -> Result<Account> {
  let mut record = get(store, id).await?;
  if let Some(name) = update.name {
    if name.trim().is_empty() {
      return Err(AppError::invalid("name must not be blank"));
    }
    record.account.user.name = name;
  }
  if let Some(phone) = update.phone {
    record.account.user.phone = Some(phone);
  }
  record.account.updated_at = Utc::now();
  save(store, &record).await?;
  Ok(record.account)
}

pub async fn set_password_hash(store: &dyn DocumentStore, id: Uuid, password_hash: String) -> Result<()> {
  let mut record = get(store, id).await?;
  record.password_hash = password_hash;
  record.account.updated_at = Utc::now();
  save(store, &record).await
}

async fn save(store: &dyn DocumentStore, record: &AccountRecord) -> Result<()> {
  let id = record.account.user.id;
  if storage::replace(store, Collection::Users, id, record).await? {
    Ok(())
  } else {
    Err(not_found(id))
  }
}
