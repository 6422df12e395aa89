// core/src/dashboard/restaurant.rs

use super::Snapshot;
use crate::models::{MenuItem, Order, OrderStatus, Restaurant};
use crate::reports::{self, PaymentsSummary, SalesReport};
use serde::Serialize;
use uuid::Uuid;

/// One ticket of the electronic queue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
  pub queue_number: Option<u32>,
  pub order_id: Uuid,
  pub status: OrderStatus,
  pub items: String,
  pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColumn {
  pub status: OrderStatus,
  pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDashboard {
  pub restaurant: Restaurant,
  /// Pending and confirmed orders, lowest queue number first.
  pub queue: Vec<QueueEntry>,
  /// Every order of the restaurant, one column per status.
  pub board: Vec<StatusColumn>,
  pub inventory: Vec<MenuItem>,
  pub report: SalesReport,
  pub payments: PaymentsSummary,
}

impl RestaurantDashboard {
  pub fn build(restaurant: &Restaurant, snapshot: Snapshot<'_>) -> Self {
    let own: Vec<&Order> = snapshot
      .orders
      .iter()
      .filter(|o| o.restaurant_id == restaurant.id)
      .collect();

    let mut queue: Vec<QueueEntry> = own
      .iter()
      .filter(|o| o.status.is_queued())
      .map(|o| QueueEntry {
        queue_number: o.queue_number,
        order_id: o.id,
        status: o.status,
        items: o.items_summary(),
        total_amount: o.total_amount,
      })
      .collect();
    queue.sort_by_key(|entry| entry.queue_number);

    let board = OrderStatus::ALL
      .into_iter()
      .map(|status| StatusColumn {
        status,
        orders: own.iter().filter(|o| o.status == status).map(|o| (*o).clone()).collect(),
      })
      .collect();

    Self {
      restaurant: restaurant.clone(),
      queue,
      board,
      inventory: snapshot
        .menu_items
        .iter()
        .filter(|item| item.restaurant_id == restaurant.id)
        .cloned()
        .collect(),
      report: reports::sales_report(restaurant.id, snapshot.orders),
      payments: reports::payments(restaurant.id, snapshot.orders),
    }
  }
}
