// server/src/flows/register_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::RegisterCtxData;
use crate::repositories::users::{self, Account, AccountRecord};
use crate::services::auth_service;
use chrono::Utc;
use justo::models::{Role, User};
use justo::{Flow, FlowControl, FlowRegistry, Shared};
use tracing::{event, info, warn, Level};
use uuid::Uuid;

/// Registers the account registration flow.
pub fn register_register_flow(registry: &FlowRegistry<AppError>) {
  let mut flow = Flow::<RegisterCtxData, AppError>::new(
    "register",
    &[
      ("validate_register_input", false, None),
      ("check_existing_email", false, None),
      ("create_account", false, None),
      ("issue_token", false, None),
    ],
  );

  flow.on("validate_register_input", |ctx: Shared<RegisterCtxData>| async move {
    let (errors, email) = {
      let guard = ctx.read();
      let mut errors = Vec::new();
      if guard.name.trim().is_empty() {
        errors.push("name is required".to_string());
      }
      if guard.email.trim().is_empty() || !guard.email.contains('@') {
        errors.push("a valid email is required".to_string());
      }
      if guard.password.is_empty() {
        errors.push("password is required".to_string());
      }
      if guard.role == Role::Restaurant && guard.restaurant_id.is_none() {
        errors.push("restaurant accounts must name their restaurant".to_string());
      }
      (errors, guard.email.trim().to_string())
    };

    if !errors.is_empty() {
      warn!(problems = errors.len(), "Registration input rejected.");
      return Err(AppError::Validation(errors));
    }
    ctx.write().email = email;
    Ok(FlowControl::Continue)
  });

  flow.on("check_existing_email", |ctx: Shared<RegisterCtxData>| async move {
    let (email, store) = {
      let guard = ctx.read();
      (guard.email.clone(), guard.app_state.store.clone())
    };

    event!(Level::DEBUG, email = %email, "Checking if email is already registered.");
    if users::find_by_email(store.as_ref(), &email).await?.is_some() {
      warn!(email = %email, "Attempt to register an existing email.");
      return Err(AppError::Conflict("User already exists".to_string()));
    }
    Ok(FlowControl::Continue)
  });

  flow.on("create_account", |ctx: Shared<RegisterCtxData>| async move {
    let (record, store) = {
      let guard = ctx.read();
      let password_hash = auth_service::hash_password(&guard.password)?;
      let now = Utc::now();
      let record = AccountRecord {
        account: Account {
          user: User {
            id: Uuid::new_v4(),
            name: guard.name.trim().to_string(),
            email: guard.email.clone(),
            role: guard.role,
            phone: guard.phone.clone(),
            restaurant_id: guard.role.affiliation(guard.restaurant_id),
          },
          created_at: now,
          updated_at: now,
        },
        password_hash,
      };
      (record, guard.app_state.store.clone())
    };

    users::insert(store.as_ref(), &record).await?;
    info!(user_id = %record.account.user.id, role = %record.account.user.role, "Account created.");
    ctx.write().account = Some(record.account);
    Ok::<_, AppError>(FlowControl::Continue)
  });

  flow.on("issue_token", |ctx: Shared<RegisterCtxData>| async move {
    let token = {
      let guard = ctx.read();
      let account = guard
        .account
        .as_ref()
        .ok_or_else(|| AppError::Internal("account missing before token issue".to_string()))?;
      guard.app_state.tokens.issue(account.user.id, account.user.role)?
    };
    ctx.write().token = Some(token);
    Ok::<_, AppError>(FlowControl::Continue)
  });

  registry.register(flow);
  tracing::info!("Register flow registered.");
}
