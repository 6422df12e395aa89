// server/src/web/handlers/mod.rs

pub mod dashboard_handlers;
pub mod menu_handlers;
pub mod order_handlers;
pub mod restaurant_handlers;
pub mod user_handlers;
