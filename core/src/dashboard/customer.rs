// core/src/dashboard/customer.rs

use super::Snapshot;
use crate::models::{Order, OrderStatus, Restaurant, User};
use serde::Serialize;

/// Categories offered by the support ticket form.
pub const SUPPORT_CATEGORIES: [&str; 4] = ["delivery", "payment", "order", "account"];

pub const FAQ: [(&str, &str); 3] = [
  (
    "How long does delivery take?",
    "Each restaurant shows its delivery time; the estimate starts when the order is confirmed.",
  ),
  (
    "Can I rate an order?",
    "Yes, once it is delivered. Rating again replaces the previous rating.",
  ),
  (
    "Which payment methods are accepted?",
    "Card or cash on delivery.",
  ),
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
  pub question: String,
  pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDashboard {
  pub user_name: String,
  /// Open restaurants first, then closed ones.
  pub restaurants: Vec<Restaurant>,
  pub orders: Vec<Order>,
  pub awaiting_rating: Vec<Order>,
  pub rated: Vec<Order>,
  pub support_categories: Vec<String>,
  pub faq: Vec<FaqEntry>,
}

impl CustomerDashboard {
  pub fn build(user: &User, snapshot: Snapshot<'_>) -> Self {
    let mut restaurants = snapshot.restaurants.to_vec();
    restaurants.sort_by_key(|r| !r.is_open);

    let orders: Vec<Order> = snapshot
      .orders
      .iter()
      .filter(|o| o.customer_id == user.id)
      .cloned()
      .collect();
    let awaiting_rating = orders
      .iter()
      .filter(|o| o.status == OrderStatus::Delivered && o.rating.is_none())
      .cloned()
      .collect();
    let rated = orders.iter().filter(|o| o.rating.is_some()).cloned().collect();

    Self {
      user_name: user.name.clone(),
      restaurants,
      orders,
      awaiting_rating,
      rated,
      support_categories: SUPPORT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
      faq: FAQ
        .iter()
        .map(|(q, a)| FaqEntry {
          question: q.to_string(),
          answer: a.to_string(),
        })
        .collect(),
    }
  }
}
