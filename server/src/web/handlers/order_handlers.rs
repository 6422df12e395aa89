// server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use justo::models::{Address, Order, OrderStatus, PaymentMethod};
use justo::{CartLineRequest, FlowOutcome, OrderFilter, OrderQuery, Shared};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::flows::contexts::CheckoutCtxData;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
  pub restaurant_id: Uuid,
  #[serde(default)]
  pub items: Vec<CartLineRequest>,
  #[serde(default)]
  pub delivery_address: Address,
  #[serde(default)]
  pub payment_method: PaymentMethod,
}

#[derive(Deserialize, Debug)]
pub struct StatusPayload {
  pub status: OrderStatus,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PrepTimePayload {
  pub prep_time: u32,
}

#[derive(Deserialize, Debug)]
pub struct RatingPayload {
  pub rating: u8,
  pub feedback: Option<String>,
}

#[instrument(
  name = "handler::create_order",
  skip(app_state, auth_user, req_payload),
  fields(user_id = %auth_user.user_id, restaurant_id = %req_payload.restaurant_id)
)]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  req_payload: web::Json<CheckoutPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  let ctx = Shared::new(CheckoutCtxData {
    app_state: app_state.get_ref().clone(),
    customer_id: auth_user.user_id,
    restaurant_id: payload.restaurant_id,
    lines: payload.items,
    address: payload.delivery_address,
    payment_method: payload.payment_method,
    restaurant: None,
    cart: None,
    order: None,
  });

  match app_state.flows.run(ctx.clone()).await? {
    FlowOutcome::Completed => {
      let order = ctx.read().order.clone().ok_or_else(|| {
        warn!("Checkout flow completed but no order was recorded.");
        AppError::Internal("Checkout completed without an order.".to_string())
      })?;
      info!(order_id = %order.id, total = order.total_amount, "Order placed.");
      Ok(HttpResponse::Created().json(order))
    }
    FlowOutcome::Stopped => Err(AppError::FlowHalted),
  }
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  query: web::Query<OrderQuery>,
) -> Result<HttpResponse, AppError> {
  let filter = OrderFilter::try_from(query.into_inner())?;
  let orders: Vec<Order> = app_state.ledger.read().list(filter).into_iter().cloned().collect();
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let order = app_state.ledger.read().get(path.into_inner())?.clone();
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::update_order_status", skip(app_state))]
pub async fn update_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<StatusPayload>,
) -> Result<HttpResponse, AppError> {
  let order = app_state
    .ledger
    .write()
    .set_status(path.into_inner(), req_payload.status)?;
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::set_prep_time", skip(app_state))]
pub async fn set_prep_time_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<PrepTimePayload>,
) -> Result<HttpResponse, AppError> {
  let order = app_state
    .ledger
    .write()
    .set_prep_time(path.into_inner(), req_payload.prep_time)?;
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::rate_order", skip(app_state, req_payload))]
pub async fn rate_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<RatingPayload>,
) -> Result<HttpResponse, AppError> {
  let RatingPayload { rating, feedback } = req_payload.into_inner();
  let order = app_state.ledger.write().rate(path.into_inner(), rating, feedback)?;
  Ok(HttpResponse::Ok().json(order))
}
