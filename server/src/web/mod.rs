// server/src/web/mod.rs

pub mod extractors;
pub mod handlers;
pub mod routes;

pub use routes::configure_app_routes;

use crate::errors::{json_error_handler, path_error_handler, query_error_handler};
use crate::state::AppState;
use actix_web::web;

/// Everything an `App` needs: shared state, extractor error shapes, routes.
pub fn configure_app(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
  move |cfg| {
    cfg
      .app_data(state)
      .app_data(web::JsonConfig::default().error_handler(json_error_handler))
      .app_data(web::QueryConfig::default().error_handler(query_error_handler))
      .app_data(web::PathConfig::default().error_handler(path_error_handler))
      .configure(configure_app_routes);
  }
}
