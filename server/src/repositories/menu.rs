// server/src/repositories/menu.rs

use crate::errors::{AppError, Result};
use crate::storage::{self, Collection, DocumentStore};
use justo::models::{MenuItem, MenuItemPatch, NewMenuItem};
use justo::JustoError;
use tracing::{debug, instrument};
use uuid::Uuid;

fn not_found(id: Uuid) -> AppError {
  JustoError::not_found("Menu item", id).into()
}

pub async fn list_all(store: &dyn DocumentStore) -> Result<Vec<MenuItem>> {
  storage::load_all(store, Collection::MenuItems).await
}

pub async fn list_for_restaurant(store: &dyn DocumentStore, restaurant_id: Uuid) -> Result<Vec<MenuItem>> {
  Ok(
    list_all(store)
      .await?
      .into_iter()
      .filter(|item| item.restaurant_id == restaurant_id)
      .collect(),
  )
}

pub async fn get(store: &dyn DocumentStore, id: Uuid) -> Result<MenuItem> {
  storage::load(store, Collection::MenuItems, id)
    .await?
    .ok_or_else(|| not_found(id))
}

#[instrument(name = "menu::create", skip(store, new_item), err(Display))]
pub async fn create(store: &dyn DocumentStore, new_item: NewMenuItem) -> Result<MenuItem> {
  new_item.validate()?;
  let item = new_item.into_item(Uuid::new_v4());
  storage::insert(store, Collection::MenuItems, item.id, &item).await?;
  debug!(menu_item_id = %item.id, "Menu item stored.");
  Ok(item)
}

pub async fn update(store: &dyn DocumentStore, id: Uuid, patch: MenuItemPatch) -> Result<MenuItem> {
  let mut item = get(store, id).await?;
  patch.apply(&mut item)?;
  save(store, &item).await?;
  Ok(item)
}

pub async fn delete(store: &dyn DocumentStore, id: Uuid) -> Result<()> {
  if store.delete(Collection::MenuItems, id).await? {
    Ok(())
  } else {
    Err(not_found(id))
  }
}

/// Flips `available` and persists it.
#[instrument(name = "menu::toggle_availability", skip(store), err(Display))]
pub async fn toggle_availability(store: &dyn DocumentStore, id: Uuid) -> Result<MenuItem> {
  let mut item = get(store, id).await?;
  item.available = !item.available;
  save(store, &item).await?;
  debug!(available = item.available, "Availability toggled.");
  Ok(item)
}

async fn save(store: &dyn DocumentStore, item: &MenuItem) -> Result<()> {
  if storage::replace(store, Collection::MenuItems, item.id, item).await? {
    Ok(())
  } else {
    Err(not_found(item.id))
  }
}
