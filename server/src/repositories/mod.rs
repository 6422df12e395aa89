// server/src/repositories/mod.rs

//! Typed access to the document collections.

pub mod menu;
pub mod restaurants;
pub mod users;

use crate::errors::Result;
use crate::storage::{self, Collection, DocumentStore};
use justo::seed;
use justo::models::Restaurant;
use tracing::{info, instrument};

/// Loads the demo restaurants and menus into an empty store. A store that
/// already holds restaurants is left alone.
#[instrument(name = "repositories::seed_catalog", skip(store), err(Display))]
pub async fn seed_catalog(store: &dyn DocumentStore) -> Result<bool> {
  let existing: Vec<Restaurant> = storage::load_all(store, Collection::Restaurants).await?;
  if !existing.is_empty() {
    info!(restaurants = existing.len(), "Catalog already present, skipping seed.");
    return Ok(false);
  }

  let restaurants = seed::restaurants();
  let items = seed::menu_items();
  for restaurant in &restaurants {
    storage::insert(store, Collection::Restaurants, restaurant.id, restaurant).await?;
  }
  for item in &items {
    storage::insert(store, Collection::MenuItems, item.id, item).await?;
  }
  info!(restaurants = restaurants.len(), menu_items = items.len(), "Demo catalog seeded.");
  Ok(true)
}
