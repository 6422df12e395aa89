// core/src/dashboard/admin.rs

use super::Snapshot;
use crate::models::{Order, OrderStatus};
use crate::reports;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantStats {
  pub restaurant_id: Uuid,
  pub name: String,
  pub is_open: bool,
  pub rating: f64,
  pub orders: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
  pub status: OrderStatus,
  pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
  pub total_orders: usize,
  pub open_restaurants: usize,
  pub restaurants: Vec<RestaurantStats>,
  pub orders_by_status: Vec<StatusCount>,
  pub orders: Vec<Order>,
  pub revenue: f64,
}

impl AdminDashboard {
  pub fn build(snapshot: Snapshot<'_>) -> Self {
    let restaurants = snapshot
      .restaurants
      .iter()
      .map(|r| RestaurantStats {
        restaurant_id: r.id,
        name: r.name.clone(),
        is_open: r.is_open,
        rating: r.rating,
        orders: snapshot.orders.iter().filter(|o| o.restaurant_id == r.id).count(),
      })
      .collect();

    let orders_by_status = OrderStatus::ALL
      .into_iter()
      .map(|status| StatusCount {
        status,
        count: snapshot.orders.iter().filter(|o| o.status == status).count(),
      })
      .collect();

    Self {
      total_orders: snapshot.orders.len(),
      open_restaurants: snapshot.restaurants.iter().filter(|r| r.is_open).count(),
      restaurants,
      orders_by_status,
      orders: snapshot.orders.to_vec(),
      revenue: reports::revenue(snapshot.orders),
    }
  }
}
