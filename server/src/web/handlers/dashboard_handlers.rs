// server/src/web/handlers/dashboard_handlers.rs

use actix_web::{web, HttpResponse};
use justo::{Dashboard, Snapshot};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::repositories::{menu, restaurants, users};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

/// Dashboard for the bearer's role, rebuilt from current data on every call.
#[instrument(name = "handler::dashboard", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn dashboard_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let store = app_state.store.as_ref();
  let account = users::get(store, auth_user.user_id).await?.account;
  let all_restaurants = restaurants::list(store, None).await?;
  let menu_items = menu::list_all(store).await?;

  let dashboard = {
    let ledger = app_state.ledger.read();
    let snapshot = Snapshot {
      restaurants: &all_restaurants,
      menu_items: &menu_items,
      orders: ledger.orders(),
    };
    Dashboard::for_user(&account.user, snapshot)?
  };
  info!(kind = dashboard.kind(), "Dashboard built.");
  Ok(HttpResponse::Ok().json(dashboard))
}
