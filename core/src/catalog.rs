// core/src/catalog.rs

//! In-memory catalog: the restaurants and menu items the storefront browses.
//!
//! Lookups are linear scans over two vectors, which is all a demo-sized catalog
//! needs. The backend keeps the same records in its document store instead.

use crate::error::{JustoError, JustoResult};
use crate::models::{MenuItem, MenuItemPatch, NewMenuItem, NewRestaurant, Restaurant, RestaurantPatch};
use tracing::{debug, instrument};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
  restaurants: Vec<Restaurant>,
  menu_items: Vec<MenuItem>,
}

impl Catalog {
  pub fn new(restaurants: Vec<Restaurant>, menu_items: Vec<MenuItem>) -> Self {
    Self {
      restaurants,
      menu_items,
    }
  }

  /// The six demo restaurants and their menus.
  pub fn seeded() -> Self {
    Self::new(crate::seed::restaurants(), crate::seed::menu_items())
  }

  pub fn list_restaurants(&self) -> &[Restaurant] {
    &self.restaurants
  }

  pub fn search(&self, term: &str) -> Vec<&Restaurant> {
    self.restaurants.iter().filter(|r| r.matches(term)).collect()
  }

  pub fn get_restaurant(&self, id: Uuid) -> JustoResult<&Restaurant> {
    self
      .restaurants
      .iter()
      .find(|r| r.id == id)
      .ok_or_else(|| JustoError::not_found("Restaurant", id))
  }

  pub fn menu_items(&self) -> &[MenuItem] {
    &self.menu_items
  }

  pub fn list_menu(&self, restaurant_id: Uuid) -> Vec<&MenuItem> {
    self
      .menu_items
      .iter()
      .filter(|item| item.restaurant_id == restaurant_id)
      .collect()
  }

  pub fn get_menu_item(&self, id: Uuid) -> JustoResult<&MenuItem> {
    self
      .menu_items
      .iter()
      .find(|item| item.id == id)
      .ok_or_else(|| JustoError::not_found("Menu item", id))
  }

  #[instrument(skip(self, new_restaurant), fields(name = %new_restaurant.name))]
  pub fn create_restaurant(&mut self, new_restaurant: NewRestaurant) -> JustoResult<Restaurant> {
    new_restaurant.validate()?;
    let restaurant = new_restaurant.into_restaurant(Uuid::new_v4());
    debug!(restaurant_id = %restaurant.id, "Restaurant added to catalog.");
    self.restaurants.push(restaurant.clone());
    Ok(restaurant)
  }

  pub fn update_restaurant(&mut self, id: Uuid, patch: RestaurantPatch) -> JustoResult<Restaurant> {
    let restaurant = self
      .restaurants
      .iter_mut()
      .find(|r| r.id == id)
      .ok_or_else(|| JustoError::not_found("Restaurant", id))?;
    patch.apply(restaurant)?;
    Ok(restaurant.clone())
  }

  /// Removes the restaurant only. Its menu items and orders stay where they are.
  pub fn delete_restaurant(&mut self, id: Uuid) -> JustoResult<Restaurant> {
    let idx = self
      .restaurants
      .iter()
      .position(|r| r.id == id)
      .ok_or_else(|| JustoError::not_found("Restaurant", id))?;
    Ok(self.restaurants.remove(idx))
  }

  pub fn create_menu_item(&mut self, new_item: NewMenuItem) -> JustoResult<MenuItem> {
    new_item.validate()?;
    let item = new_item.into_item(Uuid::new_v4());
    self.menu_items.push(item.clone());
    Ok(item)
  }

  pub fn update_menu_item(&mut self, id: Uuid, patch: MenuItemPatch) -> JustoResult<MenuItem> {
    let item = self.menu_item_mut(id)?;
    patch.apply(item)?;
    Ok(item.clone())
  }

  pub fn delete_menu_item(&mut self, id: Uuid) -> JustoResult<MenuItem> {
    let idx = self
      .menu_items
      .iter()
      .position(|item| item.id == id)
      .ok_or_else(|| JustoError::not_found("Menu item", id))?;
    Ok(self.menu_items.remove(idx))
  }

  /// Flips `available` and returns the item as stored afterwards.
  #[instrument(skip(self))]
  pub fn toggle_availability(&mut self, id: Uuid) -> JustoResult<MenuItem> {
    let item = self.menu_item_mut(id)?;
    item.available = !item.available;
    debug!(available = item.available, "Menu item availability toggled.");
    Ok(item.clone())
  }

  fn menu_item_mut(&mut self, id: Uuid) -> JustoResult<&mut MenuItem> {
    self
      .menu_items
      .iter_mut()
      .find(|item| item.id == id)
      .ok_or_else(|| JustoError::not_found("Menu item", id))
  }
}
