// core/src/models/user.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Customer,
  Restaurant,
  Admin,
  Operator,
}

impl Role {
  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Customer => "customer",
      Role::Restaurant => "restaurant",
      Role::Admin => "admin",
      Role::Operator => "operator",
    }
  }

  /// Keeps `restaurant_id` only for roles that work for a restaurant.
  pub fn affiliation(&self, restaurant_id: Option<Uuid>) -> Option<Uuid> {
    match self {
      Role::Restaurant | Role::Operator => restaurant_id,
      Role::Customer | Role::Admin => None,
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Role {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "customer" => Ok(Role::Customer),
      "restaurant" => Ok(Role::Restaurant),
      "admin" => Ok(Role::Admin),
      "operator" => Ok(Role::Operator),
      other => Err(format!("unknown role '{}'", other)),
    }
  }
}

/// A signed-in identity. Carries no credential material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub role: Role,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub restaurant_id: Option<Uuid>,
}

impl User {
  /// Restaurant the user works for, when the role carries one.
  pub fn affiliation(&self) -> Option<Uuid> {
    self.role.affiliation(self.restaurant_id)
  }
}

/// Local part of an email address, used as a display name.
pub fn name_from_email(email: &str) -> String {
  email.split('@').next().unwrap_or_default().to_string()
}
