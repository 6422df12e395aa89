// server/src/repositories/restaurants.rs

use crate::errors::{AppError, Result};
use crate::storage::{self, Collection, DocumentStore};
use justo::models::{NewRestaurant, Restaurant, RestaurantPatch};
use justo::JustoError;
use tracing::{debug, instrument};
use uuid::Uuid;

fn not_found(id: Uuid) -> AppError {
  JustoError::not_found("Restaurant", id).into()
}

/// All restaurants, narrowed by `term` when one is given.
pub async fn list(store: &dyn DocumentStore, term: Option<&str>) -> Result<Vec<Restaurant>> {
  let all: Vec<Restaurant> = storage::load_all(store, Collection::Restaurants).await?;
  Ok(match term {
    Some(term) => all.into_iter().filter(|r| r.matches(term)).collect(),
    None => all,
  })
}

pub async fn get(store: &dyn DocumentStore, id: Uuid) -> Result<Restaurant> {
  storage::load(store, Collection::Restaurants, id)
    .await?
    .ok_or_else(|| not_found(id))
}

#[instrument(name = "restaurants::create", skip(store, new_restaurant), err(Display))]
pub async fn create(store: &dyn DocumentStore, new_restaurant: NewRestaurant) -> Result<Restaurant> {
  new_restaurant.validate()?;
  let restaurant = new_restaurant.into_restaurant(Uuid::new_v4());
  storage::insert(store, Collection::Restaurants, restaurant.id, &restaurant).await?;
  debug!(restaurant_id = %restaurant.id, "Restaurant stored.");
  Ok(restaurant)
}

pub async fn update(store: &dyn DocumentStore, id: Uuid, patch: RestaurantPatch) -> Result<Restaurant> {
  let mut restaurant = get(store, id).await?;
  patch.apply(&mut restaurant)?;
  if !storage::replace(store, Collection::Restaurants, id, &restaurant).await? {
    return Err(not_found(id));
  }
  Ok(restaurant)
}

/// Removes the restaurant document only; its menu items are kept.
pub async fn delete(store: &dyn DocumentStore, id: Uuid) -> Result<()> {
  if store.delete(Collection::Restaurants, id).await? {
    Ok(())
  } else {
    Err(not_found(id))
  }
}
