// server/src/web/routes.rs

use crate::web::handlers::{dashboard_handlers, menu_handlers, order_handlers, restaurant_handlers, user_handlers};
use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Mounts every backend route under `/api`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/users")
          .route("/register", web::post().to(user_handlers::register_handler))
          .route("/login", web::post().to(user_handlers::login_handler))
          .route("/{id}", web::get().to(user_handlers::get_profile_handler))
          .route("/{id}", web::put().to(user_handlers::update_profile_handler))
          .route("/{id}/password", web::put().to(user_handlers::change_password_handler)),
      )
      .service(
        web::scope("/restaurants")
          .route("", web::get().to(restaurant_handlers::list_restaurants_handler))
          .route("", web::post().to(restaurant_handlers::create_restaurant_handler))
          .route("/{id}", web::get().to(restaurant_handlers::get_restaurant_handler))
          .route("/{id}", web::put().to(restaurant_handlers::update_restaurant_handler))
          .route("/{id}", web::delete().to(restaurant_handlers::delete_restaurant_handler))
          .route("/{id}/reports", web::get().to(restaurant_handlers::restaurant_report_handler)),
      )
      .service(
        web::scope("/menu")
          .route("", web::get().to(menu_handlers::list_menu_handler))
          .route("", web::post().to(menu_handlers::create_menu_item_handler))
          .route("/restaurant/{restaurant_id}", web::get().to(menu_handlers::restaurant_menu_handler))
          .route("/{id}", web::get().to(menu_handlers::get_menu_item_handler))
          .route("/{id}", web::put().to(menu_handlers::update_menu_item_handler))
          .route("/{id}", web::delete().to(menu_handlers::delete_menu_item_handler))
          .route("/{id}/availability", web::patch().to(menu_handlers::toggle_availability_handler)),
      )
      .service(
        web::scope("/orders")
          .route("", web::post().to(order_handlers::create_order_handler))
          .route("", web::get().to(order_handlers::list_orders_handler))
          .route("/{id}", web::get().to(order_handlers::get_order_handler))
          .route("/{id}/status", web::put().to(order_handlers::update_status_handler))
          .route("/{id}/prep-time", web::put().to(order_handlers::set_prep_time_handler))
          .route("/{id}/rating", web::post().to(order_handlers::rate_order_handler)),
      )
      .route("/dashboard", web::get().to(dashboard_handlers::dashboard_handler)),
  );
}
