// core/src/session.rs

//! Demo sign-in: no credentials, any email and role pair succeeds.

use crate::error::{JustoError, JustoResult};
use crate::models::user::name_from_email;
use crate::models::{Role, User};
use tracing::info;
use uuid::Uuid;

/// Phone number given to every demo identity.
pub const DEMO_PHONE: &str = "+57-301-1234567";

#[derive(Debug, Clone, Default)]
pub struct Session {
  user: Option<User>,
}

impl Session {
  pub fn new() -> Self {
    Self::default()
  }

  /// Fabricates a fresh identity for `email` with `role`, replacing any current one.
  ///
  /// A restaurant account must name its restaurant. The affiliation is dropped
  /// for roles that cannot carry one.
  pub fn login(&mut self, email: &str, role: Role, restaurant_id: Option<Uuid>) -> JustoResult<&User> {
    let email = email.trim();
    let mut errors = Vec::new();
    if email.is_empty() {
      errors.push("email is required".to_string());
    }
    if role == Role::Restaurant && restaurant_id.is_none() {
      errors.push("select a restaurant to sign in as an establishment".to_string());
    }
    if !errors.is_empty() {
      return Err(JustoError::Validation(errors));
    }

    let user = User {
      id: Uuid::new_v4(),
      name: name_from_email(email),
      email: email.to_string(),
      role,
      phone: Some(DEMO_PHONE.to_string()),
      restaurant_id: role.affiliation(restaurant_id),
    };
    info!(user_id = %user.id, role = %user.role, "Demo session started.");
    Ok(&*self.user.insert(user))
  }

  pub fn logout(&mut self) -> Option<User> {
    self.user.take()
  }

  pub fn current(&self) -> Option<&User> {
    self.user.as_ref()
  }

  pub fn require_user(&self) -> JustoResult<&User> {
    self
      .user
      .as_ref()
      .ok_or_else(|| JustoError::Unauthorized("sign in first".to_string()))
  }
}
