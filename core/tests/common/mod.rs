// tests/common/mod.rs
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use justo::models::{Address, MenuItem, PaymentMethod, Restaurant};
use justo::flow::StepHandler;
use justo::{Cart, CheckoutRequest, FlowControl, FlowError, Shared};
use once_cell::sync::Lazy;
use std::future::Future;
use std::pin::Pin;
use tracing::Level;
use uuid::Uuid;

// --- Tracing ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Catalog fixtures ---
pub fn restaurant(name: &str, delivery_fee: f64) -> Restaurant {
  Restaurant {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: format!("{} kitchen", name),
    rating: 4.0,
    delivery_time: 30,
    delivery_fee,
    cuisine: vec!["Colombian".to_string()],
    is_open: true,
    image: None,
  }
}

pub fn menu_item(restaurant: &Restaurant, name: &str, price: f64) -> MenuItem {
  MenuItem {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: format!("{} special", name),
    price,
    category: "Mains".to_string(),
    image: None,
    rating: 0.0,
    restaurant_id: restaurant.id,
    available: true,
  }
}

pub fn address() -> Address {
  Address {
    street: "Calle 85 #12-30".to_string(),
    city: "Bogotá".to_string(),
    zip: "110221".to_string(),
  }
}

pub fn fixed_now() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn request_for(customer_id: Uuid, lines: &[(&MenuItem, u32)]) -> CheckoutRequest {
  let restaurant_id = lines
    .first()
    .map(|(item, _)| item.restaurant_id)
    .unwrap_or_else(Uuid::new_v4);
  let mut cart = Cart::new(restaurant_id);
  for (item, qty) in lines {
    cart.add_quantity(item, *qty).unwrap();
  }
  CheckoutRequest {
    customer_id,
    cart,
    address: address(),
    payment_method: PaymentMethod::Card,
  }
}

// --- Flow fixtures ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub trail: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("flow engine error: {0}")]
  Flow(String),

  #[error("test handler failed: {0}")]
  Handler(String),
}

impl From<FlowError> for TestError {
  fn from(err: FlowError) -> Self {
    TestError::Flow(format!("{:?}", err))
  }
}

pub fn recording_handler(step_name: &'static str, mark: &'static str) -> StepHandler<TestContext, TestError> {
  Box::new(
    move |ctx: Shared<TestContext>| -> Pin<Box<dyn Future<Output = Result<FlowControl, TestError>> + Send>> {
      Box::pin(async move {
        let mut guard = ctx.write();
        guard.counter += 1;
        guard.trail.push_str(mark);
        guard.steps_executed.push(step_name.to_string());
        if guard.should_stop_at.as_deref() == Some(step_name) {
          return Ok(FlowControl::Stop);
        }
        Ok::<_, TestError>(FlowControl::Continue)
      })
    },
  )
}
