// server/src/flows/contexts.rs

//! Context data the backend flows run against. Handlers receive these wrapped
//! in `justo::Shared`.

use crate::repositories::users::{Account, AccountRecord};
use crate::state::AppState;
use justo::models::{Address, Order, PaymentMethod, Restaurant, Role};
use justo::{Cart, CartLineRequest};
use uuid::Uuid;

#[derive(Clone)]
pub struct RegisterCtxData {
  pub app_state: AppState,
  pub name: String,
  pub email: String,
  pub password: String,
  pub role: Role,
  pub phone: Option<String>,
  pub restaurant_id: Option<Uuid>,
  pub account: Option<Account>,
  pub token: Option<String>,
}

#[derive(Clone)]
pub struct LoginCtxData {
  pub app_state: AppState,
  pub email: String,
  pub password: String,
  pub record: Option<AccountRecord>,
  pub token: Option<String>,
}

#[derive(Clone)]
pub struct ChangePasswordCtxData {
  pub app_state: AppState,
  pub user_id: Uuid,
  pub current_password: String,
  pub new_password: String,
  pub stored_hash: Option<String>,
  pub password_changed: bool,
}

#[derive(Clone)]
pub struct CheckoutCtxData {
  pub app_state: AppState,
  pub customer_id: Uuid,
  pub restaurant_id: Uuid,
  pub lines: Vec<CartLineRequest>,
  pub address: Address,
  pub payment_method: PaymentMethod,
  pub restaurant: Option<Restaurant>,
  pub cart: Option<Cart>,
  pub order: Option<Order>,
}
