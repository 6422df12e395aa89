// core/src/models/mod.rs

//! Records shared by the demo storefront and the REST backend.

pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod user;

pub use menu_item::{MenuItem, MenuItemPatch, NewMenuItem};
pub use order::{Address, Order, OrderItem, OrderStatus, PaymentMethod};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantPatch};
pub use user::{Role, User};

/// Two-decimal money display, e.g. `$22.50`.
pub fn format_amount(amount: f64) -> String {
  format!("${:.2}", amount)
}

pub(crate) fn require_text(errors: &mut Vec<String>, value: &str, field: &str) {
  if value.trim().is_empty() {
    errors.push(format!("{} is required", field));
  }
}

pub(crate) fn require_non_negative(errors: &mut Vec<String>, value: f64, field: &str) {
  if !value.is_finite() || value < 0.0 {
    errors.push(format!("{} must be a non-negative number", field));
  }
}
