// server/src/web/handlers/menu_handlers.rs

use actix_web::{web, HttpResponse};
use justo::models::{MenuItemPatch, NewMenuItem};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::repositories::menu;
use crate::state::AppState;

#[instrument(name = "handler::list_menu", skip(app_state))]
pub async fn list_menu_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(menu::list_all(app_state.store.as_ref()).await?))
}

#[instrument(name = "handler::restaurant_menu", skip(app_state))]
pub async fn restaurant_menu_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let items = menu::list_for_restaurant(app_state.store.as_ref(), path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::create_menu_item", skip(app_state, req_payload))]
pub async fn create_menu_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewMenuItem>,
) -> Result<HttpResponse, AppError> {
  let item = menu::create(app_state.store.as_ref(), req_payload.into_inner()).await?;
  Ok(HttpResponse::Created().json(item))
}

#[instrument(name = "handler::get_menu_item", skip(app_state))]
pub async fn get_menu_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(menu::get(app_state.store.as_ref(), path.into_inner()).await?))
}

#[instrument(name = "handler::update_menu_item", skip(app_state, req_payload))]
pub async fn update_menu_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<MenuItemPatch>,
) -> Result<HttpResponse, AppError> {
  let item = menu::update(app_state.store.as_ref(), path.into_inner(), req_payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::toggle_availability", skip(app_state))]
pub async fn toggle_availability_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let item = menu::toggle_availability(app_state.store.as_ref(), path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::delete_menu_item", skip(app_state))]
pub async fn delete_menu_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  menu::delete(app_state.store.as_ref(), path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Menu item deleted successfully" })))
}
