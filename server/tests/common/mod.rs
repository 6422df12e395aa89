// server/tests/common/mod.rs
#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::test;
use justo_server::config::AppConfig;
use justo_server::repositories;
use justo_server::state::AppState;
use justo_server::storage::{DocumentStore, MemoryStore};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Level;

pub const TEST_SECRET: &str = "api-test-secret";

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

/// State over a fresh in-memory store holding the demo catalog.
pub async fn seeded_state() -> AppState {
  setup_tracing();
  let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
  repositories::seed_catalog(store.as_ref()).await.unwrap();
  AppState::new(AppConfig::local(TEST_SECRET), store)
}

/// Builds the test service for an `AppState`.
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new().configure(justo_server::web::configure_app(actix_web::web::Data::new($state))),
    )
    .await
  };
}

pub async fn read_json(resp: ServiceResponse) -> Value {
  test::read_body_json(resp).await
}

pub fn register_body(email: &str, role: &str) -> Value {
  json!({
    "name": "Test User",
    "email": email,
    "password": "s3cret-pass",
    "role": role,
  })
}

pub fn bearer(token: &str) -> (&'static str, String) {
  ("Authorization", format!("Bearer {}", token))
}

/// Registers an account and evaluates to the `{user, token}` response body.
macro_rules! register {
  ($app:expr, $body:expr) => {{
    let req = actix_web::test::TestRequest::post()
      .uri("/api/users/register")
      .set_json($body)
      .to_request();
    let resp = actix_web::test::call_service(&$app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    body
  }};
}
