// server/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use justo::models::Role;
use justo::{FlowOutcome, Shared};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::flows::contexts::{ChangePasswordCtxData, LoginCtxData, RegisterCtxData};
use crate::repositories::users::{self, ProfileUpdate};
use crate::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestPayload {
  pub name: String,
  pub email: String,
  pub password: String,
  pub role: Role,
  pub phone: Option<String>,
  pub restaurant_id: Option<Uuid>,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub email: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
  pub current_password: String,
  pub new_password: String,
}

#[instrument(
  name = "handler::register",
  skip(app_state, req_payload),
  fields(req_email = %req_payload.email, role = %req_payload.role)
)]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RegisterRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  let ctx = Shared::new(RegisterCtxData {
    app_state: app_state.get_ref().clone(),
    name: payload.name,
    email: payload.email,
    password: payload.password,
    role: payload.role,
    phone: payload.phone,
    restaurant_id: payload.restaurant_id,
    account: None,
    token: None,
  });

  match app_state.flows.run(ctx.clone()).await? {
    FlowOutcome::Completed => {
      let guard = ctx.read();
      let account = guard
        .account
        .clone()
        .ok_or_else(|| AppError::Internal("Registration completed without an account.".to_string()))?;
      let token = guard
        .token
        .clone()
        .ok_or_else(|| AppError::Internal("Registration completed without a token.".to_string()))?;
      info!(user_id = %account.user.id, "Registration successful.");
      Ok(HttpResponse::Created().json(json!({ "user": account, "token": token })))
    }
    FlowOutcome::Stopped => {
      warn!("Register flow stopped before completing.");
      Err(AppError::FlowHalted)
    }
  }
}

#[instrument(name = "handler::login", skip(app_state, req_payload), fields(req_email = %req_payload.email))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  let ctx = Shared::new(LoginCtxData {
    app_state: app_state.get_ref().clone(),
    email: payload.email,
    password: payload.password,
    record: None,
    token: None,
  });

  match app_state.flows.run(ctx.clone()).await? {
    FlowOutcome::Completed => {
      let guard = ctx.read();
      let (account, token) = match (&guard.record, &guard.token) {
        (Some(record), Some(token)) => (record.account.clone(), token.clone()),
        _ => return Err(AppError::Auth("Sign-in completed without an identity.".to_string())),
      };
      info!(user_id = %account.user.id, "Sign-in successful.");
      Ok(HttpResponse::Ok().json(json!({ "user": account, "token": token })))
    }
    FlowOutcome::Stopped => Err(AppError::FlowHalted),
  }
}

#[instrument(name = "handler::get_profile", skip(app_state))]
pub async fn get_profile_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let record = users::get(app_state.store.as_ref(), path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(record.account))
}

#[instrument(name = "handler::update_profile", skip(app_state, req_payload))]
pub async fn update_profile_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<ProfileUpdate>,
) -> Result<HttpResponse, AppError> {
  let account = users::update_profile(app_state.store.as_ref(), path.into_inner(), req_payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(account))
}

#[instrument(name = "handler::change_password", skip(app_state, req_payload))]
pub async fn change_password_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<ChangePasswordPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  let ctx = Shared::new(ChangePasswordCtxData {
    app_state: app_state.get_ref().clone(),
    user_id: path.into_inner(),
    current_password: payload.current_password,
    new_password: payload.new_password,
    stored_hash: None,
    password_changed: false,
  });

  match app_state.flows.run(ctx.clone()).await? {
    FlowOutcome::Completed if ctx.read().password_changed => {
      Ok(HttpResponse::Ok().json(json!({ "message": "Password updated successfully" })))
    }
    _ => Err(AppError::FlowHalted),
  }
}
