// core/src/reports.rs

//! Aggregates over the ledger. Recomputed on every call.

use crate::models::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
  pub restaurant_id: Uuid,
  pub total_orders: usize,
  pub delivered_orders: usize,
  /// Sum of delivered order totals.
  pub revenue: f64,
  /// Revenue per delivered order, 0 when nothing was delivered.
  pub average_ticket: f64,
  pub rated_orders: usize,
  pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
  pub order_id: Uuid,
  pub queue_number: Option<u32>,
  pub created_at: DateTime<Utc>,
  pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsSummary {
  pub payouts: Vec<Payout>,
  pub total: f64,
}

pub fn delivered<'a>(orders: impl IntoIterator<Item = &'a Order>) -> impl Iterator<Item = &'a Order> {
  orders.into_iter().filter(|o| o.status == OrderStatus::Delivered)
}

pub fn revenue<'a>(orders: impl IntoIterator<Item = &'a Order>) -> f64 {
  delivered(orders).map(|o| o.total_amount).sum()
}

/// Report for one restaurant; orders of other restaurants are ignored.
pub fn sales_report(restaurant_id: Uuid, orders: &[Order]) -> SalesReport {
  let own: Vec<&Order> = orders.iter().filter(|o| o.restaurant_id == restaurant_id).collect();
  let delivered_orders = delivered(own.iter().copied()).count();
  let revenue = revenue(own.iter().copied());
  let ratings: Vec<f64> = own.iter().filter_map(|o| o.rating).map(f64::from).collect();

  SalesReport {
    restaurant_id,
    total_orders: own.len(),
    delivered_orders,
    revenue,
    average_ticket: if delivered_orders > 0 {
      revenue / delivered_orders as f64
    } else {
      0.0
    },
    rated_orders: ratings.len(),
    average_rating: if ratings.is_empty() {
      None
    } else {
      Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    },
  }
}

/// Delivered orders of one restaurant as payouts, newest first.
pub fn payments(restaurant_id: Uuid, orders: &[Order]) -> PaymentsSummary {
  let payouts: Vec<Payout> = delivered(orders.iter().filter(|o| o.restaurant_id == restaurant_id))
    .map(|o| Payout {
      order_id: o.id,
      queue_number: o.queue_number,
      created_at: o.created_at,
      amount: o.total_amount,
    })
    .collect();
  let total = payouts.iter().map(|p| p.amount).sum();
  PaymentsSummary { payouts, total }
}
