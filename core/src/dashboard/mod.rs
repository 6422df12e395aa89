// core/src/dashboard/mod.rs

//! Role dashboards. Each one is a plain snapshot derived from the catalog and
//! the ledger; all mutations go back through the catalog or ledger.

pub mod admin;
pub mod customer;
pub mod delivery;
pub mod restaurant;

pub use admin::AdminDashboard;
pub use customer::CustomerDashboard;
pub use delivery::DeliveryDashboard;
pub use restaurant::RestaurantDashboard;

use crate::error::{JustoError, JustoResult};
use crate::models::{MenuItem, Order, Restaurant, Role, User};
use serde::Serialize;

/// Read-only view of the data every dashboard derives from.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
  pub restaurants: &'a [Restaurant],
  pub menu_items: &'a [MenuItem],
  pub orders: &'a [Order],
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Dashboard {
  Customer(CustomerDashboard),
  Restaurant(RestaurantDashboard),
  Admin(AdminDashboard),
  Delivery(DeliveryDashboard),
}

impl Dashboard {
  /// Picks the dashboard for `user`'s role.
  ///
  /// Restaurant accounts, and operators tied to a restaurant, get that
  /// restaurant's dashboard. Operators without a restaurant are couriers and get
  /// the delivery dashboard.
  pub fn for_user(user: &User, snapshot: Snapshot<'_>) -> JustoResult<Self> {
    match (user.role, user.restaurant_id) {
      (Role::Customer, _) => Ok(Dashboard::Customer(CustomerDashboard::build(user, snapshot))),
      (Role::Admin, _) => Ok(Dashboard::Admin(AdminDashboard::build(snapshot))),
      (Role::Restaurant | Role::Operator, Some(restaurant_id)) => {
        let restaurant = snapshot
          .restaurants
          .iter()
          .find(|r| r.id == restaurant_id)
          .ok_or_else(|| JustoError::not_found("Restaurant", restaurant_id))?;
        Ok(Dashboard::Restaurant(RestaurantDashboard::build(restaurant, snapshot)))
      }
      (Role::Operator, None) => Ok(Dashboard::Delivery(DeliveryDashboard::build(snapshot))),
      (Role::Restaurant, None) => Err(JustoError::invalid("restaurant account has no restaurant affiliation")),
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      Dashboard::Customer(_) => "customer",
      Dashboard::Restaurant(_) => "restaurant",
      Dashboard::Admin(_) => "admin",
      Dashboard::Delivery(_) => "delivery",
    }
  }
}
