// server/tests/api_tests.rs
#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use justo::models::Role;
use justo::seed::HARRYS_PIZZA;
use justo_server::services::token::TokenSigner;
use serde_json::{json, Value};
use serial_test::serial;
use uuid::Uuid;

fn as_uuid(value: &Value) -> Uuid {
  value.as_str().and_then(|s| Uuid::parse_str(s).ok()).unwrap()
}

#[actix_web::test]
#[serial]
async fn health_check_reports_ok() {
  let app = init_app!(seeded_state().await);
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(read_json(resp).await, json!({"status": "ok"}));
}

#[actix_web::test]
#[serial]
async fn registration_and_login_issue_matching_tokens() {
  let app = init_app!(seeded_state().await);

  let registered = register!(app, register_body("ana@example.com", "customer"));
  assert_eq!(registered["user"]["email"], "ana@example.com");
  assert!(registered["user"].get("passwordHash").is_none());
  let user_id = as_uuid(&registered["user"]["id"]);

  let claims = TokenSigner::new(TEST_SECRET, 24)
    .verify(registered["token"].as_str().unwrap())
    .unwrap();
  assert_eq!(claims.user_id, user_id);
  assert_eq!(claims.role, Role::Customer);

  // Duplicate email.
  let req = test::TestRequest::post()
    .uri("/api/users/register")
    .set_json(register_body("ana@example.com", "admin"))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(read_json(resp).await["error"], "User already exists");

  // Wrong password, then unknown email.
  for (email, password) in [("ana@example.com", "nope"), ("ghost@example.com", "s3cret-pass")] {
    let req = test::TestRequest::post()
      .uri("/api/users/login")
      .set_json(json!({"email": email, "password": password}))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(resp).await["error"], "Invalid credentials");
  }

  let req = test::TestRequest::post()
    .uri("/api/users/login")
    .set_json(json!({"email": "ana@example.com", "password": "s3cret-pass"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = read_json(resp).await;
  assert_eq!(as_uuid(&body["user"]["id"]), user_id);
  let claims = TokenSigner::new(TEST_SECRET, 24)
    .verify(body["token"].as_str().unwrap())
    .unwrap();
  assert_eq!(claims.user_id, user_id);
}

#[actix_web::test]
#[serial]
async fn invalid_registration_lists_every_problem() {
  let app = init_app!(seeded_state().await);
  let req = test::TestRequest::post()
    .uri("/api/users/register")
    .set_json(json!({"name": " ", "email": "not-an-email", "password": "", "role": "restaurant"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body = read_json(resp).await;
  assert_eq!(body["details"].as_array().map(Vec::len), Some(4));

  let req = test::TestRequest::post()
    .uri("/api/users/register")
    .insert_header(("Content-Type", "application/json"))
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert!(read_json(resp).await["error"].is_string());
}

#[actix_web::test]
#[serial]
async fn profile_updates_and_password_change() {
  let app = init_app!(seeded_state().await);
  let registered = register!(app, register_body("luis@example.com", "customer"));
  let user_id = as_uuid(&registered["user"]["id"]);

  let req = test::TestRequest::put()
    .uri(&format!("/api/users/{}", user_id))
    .set_json(json!({"name": "Luis", "phone": "+57-300-0000000"}))
    .to_request();
  let body = read_json(test::call_service(&app, req).await).await;
  assert_eq!(body["name"], "Luis");
  assert_eq!(body["phone"], "+57-300-0000000");

  let req = test::TestRequest::get().uri(&format!("/api/users/{}", user_id)).to_request();
  let body = read_json(test::call_service(&app, req).await).await;
  assert_eq!(body["name"], "Luis");
  assert!(body.get("passwordHash").is_none());

  let req = test::TestRequest::get().uri(&format!("/api/users/{}", Uuid::new_v4())).to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

  let req = test::TestRequest::put()
    .uri(&format!("/api/users/{}/password", user_id))
    .set_json(json!({"currentPassword": "wrong", "newPassword": "fresh-pass"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  assert_eq!(read_json(resp).await["error"], "Current password is incorrect");

  let req = test::TestRequest::put()
    .uri(&format!("/api/users/{}/password", user_id))
    .set_json(json!({"currentPassword": "s3cret-pass", "newPassword": "fresh-pass"}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

  let req = test::TestRequest::post()
    .uri("/api/users/login")
    .set_json(json!({"email": "luis@example.com", "password": "fresh-pass"}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
#[serial]
async fn restaurant_catalog_crud_and_search() {
  let app = init_app!(seeded_state().await);

  let req = test::TestRequest::get().uri("/api/restaurants?q=pizza").to_request();
  let found = read_json(test::call_service(&app, req).await).await;
  let ids: Vec<Uuid> = found.as_array().unwrap().iter().map(|r| as_uuid(&r["id"])).collect();
  assert!(ids.contains(&HARRYS_PIZZA));

  let req = test::TestRequest::post()
    .uri("/api/restaurants")
    .set_json(json!({"name": "La Brasa", "description": "Grill", "deliveryTime": 35, "deliveryFee": 3.0}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let created = read_json(resp).await;
  assert_eq!(created["isOpen"], true);
  let id = as_uuid(&created["id"]);

  let req = test::TestRequest::put()
    .uri(&format!("/api/restaurants/{}", id))
    .set_json(json!({"isOpen": false}))
    .to_request();
  assert_eq!(read_json(test::call_service(&app, req).await).await["isOpen"], false);

  let req = test::TestRequest::delete().uri(&format!("/api/restaurants/{}", id)).to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

  let req = test::TestRequest::get().uri(&format!("/api/restaurants/{}", id)).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert!(read_json(resp).await["error"].is_string());

  let req = test::TestRequest::post()
    .uri("/api/restaurants")
    .set_json(json!({"name": "", "description": "", "deliveryTime": 10, "deliveryFee": 1.0}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
#[serial]
async fn toggling_availability_twice_restores_it() {
  let app = init_app!(seeded_state().await);
  let req = test::TestRequest::get()
    .uri(&format!("/api/menu/restaurant/{}", HARRYS_PIZZA))
    .to_request();
  let menu = read_json(test::call_service(&app, req).await).await;
  let item = &menu.as_array().unwrap()[0];
  let item_id = as_uuid(&item["id"]);
  let original = item["available"].as_bool().unwrap();

  for expected in [!original, original] {
    let req = test::TestRequest::patch()
      .uri(&format!("/api/menu/{}/availability", item_id))
      .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["available"], expected);
  }

  let req = test::TestRequest::get().uri(&format!("/api/menu/{}", item_id)).to_request();
  assert_eq!(read_json(test::call_service(&app, req).await).await["available"], original);

  let req = test::TestRequest::patch()
    .uri(&format!("/api/menu/{}/availability", Uuid::new_v4()))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

  let req = test::TestRequest::get().uri("/api/menu/abc").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert!(read_json(resp).await["error"].as_str().is_some());
}

async fn margarita_id(state: &justo_server::state::AppState) -> Uuid {
  justo_server::repositories::menu::list_for_restaurant(state.store.as_ref(), HARRYS_PIZZA)
    .await
    .unwrap()
    .into_iter()
    .find(|item| item.name == "Pizza Margarita")
    .map(|item| item.id)
    .unwrap()
}

fn checkout_body(item_id: Uuid, quantity: u32) -> Value {
  json!({
    "restaurantId": HARRYS_PIZZA,
    "items": [{"menuItemId": item_id, "quantity": quantity}],
    "deliveryAddress": {"street": "Calle 85 #12-30", "city": "Bogotá", "zip": "110221"},
    "paymentMethod": "cash"
  })
}

#[actix_web::test]
#[serial]
async fn checkout_records_orders_with_queue_numbers() {
  let state = seeded_state().await;
  let margarita = margarita_id(&state).await;
  let ledger = state.ledger.clone();
  let app = init_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .set_json(checkout_body(margarita, 2))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(bearer("forged.token"))
    .set_json(checkout_body(margarita, 2))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

  let registered = register!(app, register_body("eater@example.com", "customer"));
  let token = registered["token"].as_str().unwrap().to_string();
  let customer_id = as_uuid(&registered["user"]["id"]);

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(bearer(&token))
    .set_json(checkout_body(margarita, 2))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let first = read_json(resp).await;
  assert!((first["totalAmount"].as_f64().unwrap() - 22.50).abs() < 1e-9);
  assert_eq!(first["status"], "confirmed");
  assert_eq!(first["queueNumber"], 1);
  assert_eq!(first["paymentMethod"], "cash");
  assert_eq!(as_uuid(&first["customerId"]), customer_id);

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(bearer(&token))
    .set_json(checkout_body(margarita, 1))
    .to_request();
  let second = read_json(test::call_service(&app, req).await).await;
  assert_eq!(second["queueNumber"], 2);

  let req = test::TestRequest::get()
    .uri(&format!("/api/orders?customerId={}", customer_id))
    .to_request();
  let listed = read_json(test::call_service(&app, req).await).await;
  assert_eq!(listed.as_array().map(Vec::len), Some(2));
  assert_eq!(listed[0]["id"], second["id"]);

  let req = test::TestRequest::get()
    .uri(&format!("/api/orders?customerId={}&status=ready", customer_id))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(bearer(&token))
    .set_json(json!({
      "restaurantId": Uuid::new_v4(),
      "items": [{"menuItemId": margarita, "quantity": 1}],
      "deliveryAddress": {"street": "a", "city": "b", "zip": "c"}
    }))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
  assert_eq!(ledger.read().len(), 2);
}

#[actix_web::test]
#[serial]
async fn invalid_checkout_records_nothing() {
  let state = seeded_state().await;
  let margarita = margarita_id(&state).await;
  let ledger = state.ledger.clone();
  let app = init_app!(state);
  let token = register!(app, register_body("blank@example.com", "customer"))["token"]
    .as_str()
    .unwrap()
    .to_string();

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(bearer(&token))
    .set_json(json!({
      "restaurantId": HARRYS_PIZZA,
      "items": [],
      "deliveryAddress": {"street": "  ", "city": "", "zip": "110221"}
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let details = read_json(resp).await["details"].clone();
  assert_eq!(
    details,
    json!(["street address is required", "city is required", "cart is empty"])
  );

  let unknown_item = Uuid::new_v4();
  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(bearer(&token))
    .set_json(json!({
      "restaurantId": HARRYS_PIZZA,
      "items": [{"menuItemId": unknown_item, "quantity": 1}],
      "deliveryAddress": {"street": "Calle 85 #12-30", "city": "", "zip": ""}
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    read_json(resp).await["details"],
    json!([
      "city is required",
      "postal code is required",
      format!("menu item {} does not exist", unknown_item)
    ])
  );

  let mut body = checkout_body(margarita, u32::MAX);
  body["items"] = json!([
    {"menuItemId": margarita, "quantity": u32::MAX},
    {"menuItemId": margarita, "quantity": 1}
  ]);
  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(bearer(&token))
    .set_json(body)
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    read_json(resp).await["details"],
    json!(["quantity for 'Pizza Margarita' is too large"])
  );
  assert!(ledger.read().is_empty());
}

#[actix_web::test]
#[serial]
async fn order_lifecycle_status_prep_time_and_rating() {
  let state = seeded_state().await;
  let margarita = margarita_id(&state).await;
  let app = init_app!(state);
  let token = register!(app, register_body("rater@example.com", "customer"))["token"]
    .as_str()
    .unwrap()
    .to_string();

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(bearer(&token))
    .set_json(checkout_body(margarita, 1))
    .to_request();
  let order = read_json(test::call_service(&app, req).await).await;
  let order_id = as_uuid(&order["id"]);

  let req = test::TestRequest::put()
    .uri(&format!("/api/orders/{}/status", order_id))
    .set_json(json!({"status": "preparing"}))
    .to_request();
  assert_eq!(read_json(test::call_service(&app, req).await).await["status"], "preparing");

  let req = test::TestRequest::put()
    .uri(&format!("/api/orders/{}/prep-time", order_id))
    .set_json(json!({"prepTime": 20}))
    .to_request();
  assert_eq!(read_json(test::call_service(&app, req).await).await["prepTime"], 20);

  let req = test::TestRequest::post()
    .uri(&format!("/api/orders/{}/rating", order_id))
    .set_json(json!({"rating": 6}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

  for (rating, feedback) in [(4, json!("good")), (5, Value::Null)] {
    let req = test::TestRequest::post()
      .uri(&format!("/api/orders/{}/rating", order_id))
      .set_json(json!({"rating": rating, "feedback": feedback}))
      .to_request();
    let rated = read_json(test::call_service(&app, req).await).await;
    assert_eq!(rated["status"], "delivered");
    assert_eq!(rated["rating"], rating);
  }

  let req = test::TestRequest::get().uri(&format!("/api/orders/{}", order_id)).to_request();
  let stored = read_json(test::call_service(&app, req).await).await;
  assert_eq!(stored["rating"], 5);
  assert!(stored.get("feedback").map_or(true, Value::is_null));

  let req = test::TestRequest::put()
    .uri(&format!("/api/orders/{}/status", Uuid::new_v4()))
    .set_json(json!({"status": "ready"}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

  let req = test::TestRequest::get()
    .uri(&format!("/api/restaurants/{}/reports", HARRYS_PIZZA))
    .to_request();
  let report = read_json(test::call_service(&app, req).await).await;
  assert_eq!(report["report"]["deliveredOrders"], 1);
  assert_eq!(report["payments"]["payouts"].as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
#[serial]
async fn dashboard_follows_the_bearer_role() {
  let app = init_app!(seeded_state().await);

  let req = test::TestRequest::get().uri("/api/dashboard").to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

  let cases = [
    (register_body("c@example.com", "customer"), "customer"),
    (register_body("a@example.com", "admin"), "admin"),
    (register_body("rider@example.com", "operator"), "delivery"),
    (
      json!({
        "name": "Harry",
        "email": "harry@example.com",
        "password": "s3cret-pass",
        "role": "restaurant",
        "restaurantId": HARRYS_PIZZA
      }),
      "restaurant",
    ),
  ];

  for (body, kind) in cases {
    let token = register!(app, body)["token"].as_str().unwrap().to_string();
    let req = test::TestRequest::get()
      .uri("/api/dashboard")
      .insert_header(bearer(&token))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["kind"], kind);
  }
}
