// server/src/flows/password_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::ChangePasswordCtxData;
use crate::repositories::users;
use crate::services::auth_service;
use justo::{Flow, FlowControl, FlowRegistry, Shared};
use tracing::{info, warn};

/// Registers the change-password flow: the current password must verify
/// before the new one is hashed and stored.
pub fn register_change_password_flow(registry: &FlowRegistry<AppError>) {
  let mut flow = Flow::<ChangePasswordCtxData, AppError>::new(
    "change_password",
    &[
      ("validate_new_password", false, None),
      ("fetch_stored_hash", false, None),
      ("verify_current_password", false, None),
      ("store_new_password", false, None),
    ],
  );

  flow.on("validate_new_password", |ctx: Shared<ChangePasswordCtxData>| async move {
    if ctx.read().new_password.is_empty() {
      return Err(AppError::invalid("newPassword is required"));
    }
    Ok(FlowControl::Continue)
  });

  flow.on("fetch_stored_hash", |ctx: Shared<ChangePasswordCtxData>| async move {
    let (user_id, store) = {
      let guard = ctx.read();
      (guard.user_id, guard.app_state.store.clone())
    };
    let record = users::get(store.as_ref(), user_id).await?;
    ctx.write().stored_hash = Some(record.password_hash);
    Ok::<_, AppError>(FlowControl::Continue)
  });

  flow.on("verify_current_password", |ctx: Shared<ChangePasswordCtxData>| async move {
    let (stored_hash, current) = {
      let guard = ctx.read();
      let stored_hash = guard
        .stored_hash
        .clone()
        .ok_or_else(|| AppError::Internal("stored hash missing before password check".to_string()))?;
      (stored_hash, guard.current_password.clone())
    };
    if auth_service::verify_password(&stored_hash, &current)? {
      Ok(FlowControl::Continue)
    } else {
      warn!("Current password did not verify.");
      Err(AppError::Auth("Current password is incorrect".to_string()))
    }
  });

  flow.on("store_new_password", |ctx: Shared<ChangePasswordCtxData>| async move {
    let (user_id, new_hash, store) = {
      let guard = ctx.read();
      (
        guard.user_id,
        auth_service::hash_password(&guard.new_password)?,
        guard.app_state.store.clone(),
      )
    };
    users::set_password_hash(store.as_ref(), user_id, new_hash).await?;
    ctx.write().password_changed = true;
    info!(user_id = %user_id, "Password changed.");
    Ok::<_, AppError>(FlowControl::Continue)
  });

  registry.register(flow);
  tracing::info!("Change-password flow registered.");
}
