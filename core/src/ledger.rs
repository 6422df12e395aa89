// core/src/ledger.rs

//! The order ledger: every order placed in this session or process.

use crate::checkout::{self, CheckoutRequest};
use crate::error::{JustoError, JustoResult};
use crate::models::{Order, OrderStatus, Restaurant};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

/// Which orders a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
  #[default]
  All,
  Customer(Uuid),
  Restaurant(Uuid),
  Status(OrderStatus),
}

impl OrderFilter {
  pub fn matches(&self, order: &Order) -> bool {
    match self {
      OrderFilter::All => true,
      OrderFilter::Customer(id) => order.customer_id == *id,
      OrderFilter::Restaurant(id) => order.restaurant_id == *id,
      OrderFilter::Status(status) => order.status == *status,
    }
  }
}

/// Query-string form of [`OrderFilter`]; at most one key may be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
  pub customer_id: Option<Uuid>,
  pub restaurant_id: Option<Uuid>,
  pub status: Option<OrderStatus>,
}

impl TryFrom<OrderQuery> for OrderFilter {
  type Error = JustoError;

  fn try_from(query: OrderQuery) -> Result<Self, Self::Error> {
    match (query.customer_id, query.restaurant_id, query.status) {
      (None, None, None) => Ok(OrderFilter::All),
      (Some(id), None, None) => Ok(OrderFilter::Customer(id)),
      (None, Some(id), None) => Ok(OrderFilter::Restaurant(id)),
      (None, None, Some(status)) => Ok(OrderFilter::Status(status)),
      _ => Err(JustoError::invalid(
        "filter by only one of customerId, restaurantId or status",
      )),
    }
  }
}

/// Orders, newest first.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
  orders: Vec<Order>,
}

impl Ledger {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn orders(&self) -> &[Order] {
    &self.orders
  }

  pub fn len(&self) -> usize {
    self.orders.len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.is_empty()
  }

  /// Validates and records a new order.
  ///
  /// The total is the cart subtotal plus the restaurant's delivery fee, the
  /// queue number is one more than the orders already held for that
  /// restaurant, and the order starts out `confirmed`. Nothing is recorded when
  /// validation fails.
  #[instrument(
    skip(self, restaurant, request, now),
    fields(restaurant_id = %restaurant.id, customer_id = %request.customer_id)
  )]
  pub fn create_order(
    &mut self,
    restaurant: &Restaurant,
    request: &CheckoutRequest,
    now: DateTime<Utc>,
  ) -> JustoResult<Order> {
    let mut errors = checkout::validate(request);
    if request.cart.restaurant_id() != restaurant.id {
      errors.push("cart belongs to a different restaurant".to_string());
    }
    if !errors.is_empty() {
      return Err(JustoError::Validation(errors));
    }

    let queue_number = self.count_for_restaurant(restaurant.id) + 1;
    let order = Order {
      id: Uuid::new_v4(),
      customer_id: request.customer_id,
      restaurant_id: restaurant.id,
      restaurant_name: restaurant.name.clone(),
      items: request.cart.lines().to_vec(),
      total_amount: request.cart.total_with_delivery(restaurant),
      status: OrderStatus::Confirmed,
      created_at: now,
      estimated_delivery_time: Some(now + Duration::minutes(i64::from(restaurant.delivery_time))),
      rating: None,
      feedback: None,
      queue_number: Some(queue_number as u32),
      prep_time: None,
      delivery_address: request.address.clone(),
      payment_method: request.payment_method,
    };

    info!(order_id = %order.id, queue_number, total = order.total_amount, "Order recorded.");
    self.orders.insert(0, order.clone());
    Ok(order)
  }

  pub fn count_for_restaurant(&self, restaurant_id: Uuid) -> usize {
    self
      .orders
      .iter()
      .filter(|o| o.restaurant_id == restaurant_id)
      .count()
  }

  pub fn get(&self, order_id: Uuid) -> JustoResult<&Order> {
    self
      .orders
      .iter()
      .find(|o| o.id == order_id)
      .ok_or_else(|| JustoError::not_found("Order", order_id))
  }

  pub fn list(&self, filter: OrderFilter) -> Vec<&Order> {
    self.orders.iter().filter(|o| filter.matches(o)).collect()
  }

  /// Overwrites the status. Any status may follow any other.
  #[instrument(skip(self))]
  pub fn set_status(&mut self, order_id: Uuid, status: OrderStatus) -> JustoResult<Order> {
    let order = self.get_mut(order_id)?;
    order.status = status;
    Ok(order.clone())
  }

  /// Records a 1–5 rating and optional feedback and marks the order delivered,
  /// whatever its previous status. Rating again overwrites both.
  #[instrument(skip(self, feedback))]
  pub fn rate(&mut self, order_id: Uuid, rating: u8, feedback: Option<String>) -> JustoResult<Order> {
    if !(1..=5).contains(&rating) {
      return Err(JustoError::invalid("rating must be between 1 and 5"));
    }
    let order = self.get_mut(order_id)?;
    order.rating = Some(rating);
    order.feedback = feedback;
    order.status = OrderStatus::Delivered;
    Ok(order.clone())
  }

  pub fn set_prep_time(&mut self, order_id: Uuid, minutes: u32) -> JustoResult<Order> {
    let order = self.get_mut(order_id)?;
    order.prep_time = Some(minutes);
    Ok(order.clone())
  }

  fn get_mut(&mut self, order_id: Uuid) -> JustoResult<&mut Order> {
    self
      .orders
      .iter_mut()
      .find(|o| o.id == order_id)
      .ok_or_else(|| JustoError::not_found("Order", order_id))
  }
}
