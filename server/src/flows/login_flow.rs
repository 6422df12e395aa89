// server/src/flows/login_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::LoginCtxData;
use crate::repositories::users;
use crate::services::auth_service;
use justo::{Flow, FlowControl, FlowRegistry, Shared};
use tracing::{event, warn, Level};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Registers the sign-in flow.
pub fn register_login_flow(registry: &FlowRegistry<AppError>) {
  let mut flow = Flow::<LoginCtxData, AppError>::new(
    "login",
    &[
      ("validate_login_input", false, None),
      ("fetch_account", false, None),
      ("verify_password", false, None),
      ("issue_token", false, None),
    ],
  );

  flow.on("validate_login_input", |ctx: Shared<LoginCtxData>| async move {
    let mut errors = Vec::new();
    {
      let guard = ctx.read();
      if guard.email.trim().is_empty() {
        errors.push("email is required".to_string());
      }
      if guard.password.is_empty() {
        errors.push("password is required".to_string());
      }
    }
    if !errors.is_empty() {
      return Err(AppError::Validation(errors));
    }
    Ok(FlowControl::Continue)
  });

  flow.on("fetch_account", |ctx: Shared<LoginCtxData>| async move {
    let (email, store) = {
      let guard = ctx.read();
      (guard.email.trim().to_string(), guard.app_state.store.clone())
    };

    event!(Level::DEBUG, email = %email, "Fetching account for sign-in.");
    match users::find_by_email(store.as_ref(), &email).await? {
      Some(record) => {
        event!(Level::INFO, user_id = %record.account.user.id, "Account found for sign-in.");
        ctx.write().record = Some(record);
        Ok(FlowControl::Continue)
      }
      None => {
        warn!(email = %email, "Sign-in for unknown email.");
        Err(AppError::Auth(INVALID_CREDENTIALS.to_string()))
      }
    }
  });

  flow.on("verify_password", |ctx: Shared<LoginCtxData>| async move {
    let (stored_hash, password) = {
      let guard = ctx.read();
      let record = guard
        .record
        .as_ref()
        .ok_or_else(|| AppError::Internal("account missing before password check".to_string()))?;
      (record.password_hash.clone(), guard.password.clone())
    };

    if auth_service::verify_password(&stored_hash, &password)? {
      Ok(FlowControl::Continue)
    } else {
      warn!("Password mismatch on sign-in.");
      Err(AppError::Auth(INVALID_CREDENTIALS.to_string()))
    }
  });

  flow.on("issue_token", |ctx: Shared<LoginCtxData>| async move {
    let token = {
      let guard = ctx.read();
      let record = guard
        .record
        .as_ref()
        .ok_or_else(|| AppError::Internal("account missing before token issue".to_string()))?;
      guard.app_state.tokens.issue(record.account.user.id, record.account.user.role)?
    };
    ctx.write().token = Some(token);
    Ok::<_, AppError>(FlowControl::Continue)
  });

  registry.register(flow);
  tracing::info!("Login flow registered.");
}
