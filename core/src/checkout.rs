// core/src/checkout.rs

//! Cart building and checkout validation, ahead of the ledger.

use crate::error::{JustoError, JustoResult};
use crate::models::{Address, MenuItem, OrderItem, PaymentMethod, Restaurant};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer's cart for one restaurant. Lines snapshot name and price when
/// the item is added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
  restaurant_id: Uuid,
  lines: Vec<OrderItem>,
}

impl Cart {
  pub fn new(restaurant_id: Uuid) -> Self {
    Self {
      restaurant_id,
      lines: Vec::new(),
    }
  }

  pub fn restaurant_id(&self) -> Uuid {
    self.restaurant_id
  }

  pub fn lines(&self) -> &[OrderItem] {
    &self.lines
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Adds one unit of `item`.
  pub fn add(&mut self, item: &MenuItem) -> JustoResult<()> {
    self.add_quantity(item, 1)
  }

  /// Adds `quantity` units of `item`, merging with an existing line.
  pub fn add_quantity(&mut self, item: &MenuItem, quantity: u32) -> JustoResult<()> {
    if quantity == 0 {
      return Err(JustoError::invalid(format!("quantity for '{}' must be at least 1", item.name)));
    }
    if item.restaurant_id != self.restaurant_id {
      return Err(JustoError::invalid(format!(
        "'{}' is not on this restaurant's menu",
        item.name
      )));
    }
    if !item.available {
      return Err(JustoError::invalid(format!("'{}' is currently unavailable", item.name)));
    }

    match self.lines.iter_mut().find(|line| line.menu_item_id == item.id) {
      Some(line) => {
        line.quantity = line
          .quantity
          .checked_add(quantity)
          .ok_or_else(|| JustoError::invalid(format!("quantity for '{}' is too large", item.name)))?;
      }
      None => self.lines.push(OrderItem {
        menu_item_id: item.id,
        name: item.name.clone(),
        quantity,
        price: item.price,
      }),
    }
    Ok(())
  }

  /// Drops the whole line for `menu_item_id`, whatever its quantity.
  pub fn remove(&mut self, menu_item_id: Uuid) -> bool {
    let before = self.lines.len();
    self.lines.retain(|line| line.menu_item_id != menu_item_id);
    self.lines.len() != before
  }

  pub fn subtotal(&self) -> f64 {
    self.lines.iter().map(OrderItem::line_total).sum()
  }

  pub fn total_with_delivery(&self, restaurant: &Restaurant) -> f64 {
    self.subtotal() + restaurant.delivery_fee
  }
}

/// Everything the customer submits at checkout.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
  pub customer_id: Uuid,
  pub cart: Cart,
  pub address: Address,
  pub payment_method: PaymentMethod,
}

/// Cart line as sent over the wire; resolved against the menu by [`build_cart`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineRequest {
  pub menu_item_id: Uuid,
  pub quantity: u32,
}

/// Resolves wire cart lines against a restaurant's menu, collecting every
/// problem instead of stopping at the first one.
pub fn build_cart(restaurant_id: Uuid, lines: &[CartLineRequest], menu: &[MenuItem]) -> JustoResult<Cart> {
  let mut cart = Cart::new(restaurant_id);
  let mut errors = Vec::new();
  for line in lines {
    match menu.iter().find(|item| item.id == line.menu_item_id) {
      Some(item) => {
        if let Err(JustoError::Validation(mut found)) = cart.add_quantity(item, line.quantity) {
          errors.append(&mut found);
        }
      }
      None => errors.push(format!("menu item {} does not exist", line.menu_item_id)),
    }
  }
  if errors.is_empty() {
    Ok(cart)
  } else {
    Err(JustoError::Validation(errors))
  }
}

/// Delivery address checks: every field must be non-blank.
pub fn validate_address(address: &Address) -> Vec<String> {
  let mut errors = Vec::new();
  if address.street.trim().is_empty() {
    errors.push("street address is required".to_string());
  }
  if address.city.trim().is_empty() {
    errors.push("city is required".to_string());
  }
  if address.zip.trim().is_empty() {
    errors.push("postal code is required".to_string());
  }
  errors
}

/// Checkout form validation. Returns every problem found.
pub fn validate(request: &CheckoutRequest) -> Vec<String> {
  let mut errors = validate_address(&request.address);
  if request.cart.is_empty() {
    errors.push("cart is empty".to_string());
  }
  errors
}
