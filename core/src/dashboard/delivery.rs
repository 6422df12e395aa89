// core/src/dashboard/delivery.rs

use super::Snapshot;
use crate::models::{Order, OrderStatus};
use serde::Serialize;

/// Courier view: orders waiting for pickup, on the road and done.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDashboard {
  pub available: Vec<Order>,
  pub active: Vec<Order>,
  pub completed: Vec<Order>,
  /// Delivery fees of completed orders.
  pub earnings: f64,
}

impl DeliveryDashboard {
  pub fn build(snapshot: Snapshot<'_>) -> Self {
    let with_status =
      |status: OrderStatus| -> Vec<Order> { snapshot.orders.iter().filter(|o| o.status == status).cloned().collect() };

    let completed = with_status(OrderStatus::Delivered);
    let earnings = completed.iter().map(Order::delivery_fee).sum();

    Self {
      available: with_status(OrderStatus::Ready),
      active: with_status(OrderStatus::Picked),
      completed,
      earnings,
    }
  }
}
