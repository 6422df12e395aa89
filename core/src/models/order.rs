// core/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Order lifecycle states. Any state may follow any other; nothing enforces a
/// transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Confirmed,
  Preparing,
  Ready,
  Picked,
  Delivered,
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 6] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::Ready,
    OrderStatus::Picked,
    OrderStatus::Delivered,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Confirmed => "confirmed",
      OrderStatus::Preparing => "preparing",
      OrderStatus::Ready => "ready",
      OrderStatus::Picked => "picked",
      OrderStatus::Delivered => "delivered",
    }
  }

  /// Still waiting in the kitchen queue.
  pub fn is_queued(&self) -> bool {
    matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    OrderStatus::ALL
      .into_iter()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| format!("unknown order status '{}'", s))
  }
}

/// Line of an order. Name and price are copied from the menu when the order is
/// placed and never follow later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
  pub menu_item_id: Uuid,
  pub name: String,
  pub quantity: u32,
  pub price: f64,
}

impl OrderItem {
  pub fn line_total(&self) -> f64 {
    self.price * f64::from(self.quantity)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
  pub street: String,
  pub city: String,
  pub zip: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
  #[default]
  Card,
  Cash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: Uuid,
  pub customer_id: Uuid,
  pub restaurant_id: Uuid,
  pub restaurant_name: String,
  pub items: Vec<OrderItem>,
  pub total_amount: f64,
  pub status: OrderStatus,
  pub created_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub estimated_delivery_time: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rating: Option<u8>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub feedback: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub queue_number: Option<u32>,
  /// Kitchen preparation estimate in minutes.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub prep_time: Option<u32>,
  pub delivery_address: Address,
  pub payment_method: PaymentMethod,
}

impl Order {
  pub fn items_total(&self) -> f64 {
    self.items.iter().map(OrderItem::line_total).sum()
  }

  /// Fee part of the total, i.e. what the courier earns.
  pub fn delivery_fee(&self) -> f64 {
    self.total_amount - self.items_total()
  }

  /// Short `2x Arepa, 1x Limonada` summary used by kitchen views.
  pub fn items_summary(&self) -> String {
    self
      .items
      .iter()
      .map(|i| format!("{}x {}", i.quantity, i.name))
      .collect::<Vec<_>>()
      .join(", ")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_parses_its_own_rendering() {
    for status in OrderStatus::ALL {
      assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
    }
    assert!("shipped".parse::<OrderStatus>().is_err());
  }

  #[test]
  fn status_serializes_lowercase() {
    let json = serde_json::to_string(&OrderStatus::Picked).unwrap();
    assert_eq!(json, "\"picked\"");
  }
}
