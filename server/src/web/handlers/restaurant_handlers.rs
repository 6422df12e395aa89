// server/src/web/handlers/restaurant_handlers.rs

use actix_web::{web, HttpResponse};
use justo::models::{NewRestaurant, RestaurantPatch};
use justo::reports;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::repositories::restaurants;
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct ListRestaurantsQuery {
  /// Case-insensitive match on name or cuisine.
  pub q: Option<String>,
}

#[instrument(name = "handler::list_restaurants", skip(app_state))]
pub async fn list_restaurants_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListRestaurantsQuery>,
) -> Result<HttpResponse, AppError> {
  let found = restaurants::list(app_state.store.as_ref(), query.q.as_deref()).await?;
  info!(count = found.len(), "Restaurants listed.");
  Ok(HttpResponse::Ok().json(found))
}

#[instrument(name = "handler::create_restaurant", skip(app_state, req_payload))]
pub async fn create_restaurant_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewRestaurant>,
) -> Result<HttpResponse, AppError> {
  let restaurant = restaurants::create(app_state.store.as_ref(), req_payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(restaurant))
}

#[instrument(name = "handler::get_restaurant", skip(app_state))]
pub async fn get_restaurant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let restaurant = restaurants::get(app_state.store.as_ref(), path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(restaurant))
}

#[instrument(name = "handler::update_restaurant", skip(app_state, req_payload))]
pub async fn update_restaurant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<RestaurantPatch>,
) -> Result<HttpResponse, AppError> {
  let restaurant = restaurants::update(app_state.store.as_ref(), path.into_inner(), req_payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(restaurant))
}

#[instrument(name = "handler::delete_restaurant", skip(app_state))]
pub async fn delete_restaurant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  restaurants::delete(app_state.store.as_ref(), path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Restaurant deleted successfully" })))
}

/// Sales report over the orders recorded by this process.
#[instrument(name = "handler::restaurant_report", skip(app_state))]
pub async fn restaurant_report_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let restaurant = restaurants::get(app_state.store.as_ref(), path.into_inner()).await?;
  let (report, payments) = {
    let ledger = app_state.ledger.read();
    (
      reports::sales_report(restaurant.id, ledger.orders()),
      reports::payments(restaurant.id, ledger.orders()),
    )
  };
  Ok(HttpResponse::Ok().json(json!({ "report": report, "payments": payments })))
}
