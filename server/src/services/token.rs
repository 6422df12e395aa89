// server/src/services/token.rs

//! Stateless session tokens: `base64url(claims JSON) "." base64url(HMAC-SHA256)`.

use crate::errors::AppError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use justo::models::Role;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
  pub user_id: Uuid,
  pub role: Role,
  /// Expiry as Unix seconds.
  pub exp: i64,
}

#[derive(Clone)]
pub struct TokenSigner {
  secret: Vec<u8>,
  ttl: Duration,
}

impl std::fmt::Debug for TokenSigner {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenSigner").field("ttl", &self.ttl).finish_non_exhaustive()
  }
}

fn invalid_token() -> AppError {
  AppError::Auth("Invalid or expired token.".to_string())
}

impl TokenSigner {
  pub fn new(secret: impl AsRef<[u8]>, ttl_hours: i64) -> Self {
    Self {
      secret: secret.as_ref().to_vec(),
      ttl: Duration::hours(ttl_hours),
    }
  }

  fn mac(&self) -> Result<HmacSha256, AppError> {
    HmacSha256::new_from_slice(&self.secret).map_err(|e| AppError::Config(format!("Unusable token secret: {}", e)))
  }

  pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String, AppError> {
    self.issue_at(user_id, role, Utc::now())
  }

  #[instrument(name = "token::issue", skip(self, issued_at))]
  pub fn issue_at(&self, user_id: Uuid, role: Role, issued_at: DateTime<Utc>) -> Result<String, AppError> {
    let claims = Claims {
      user_id,
      role,
      exp: (issued_at + self.ttl).timestamp(),
    };
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).map_err(|e| AppError::Internal(e.to_string()))?);

    let mut mac = self.mac()?;
    mac.update(payload.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    debug!(exp = claims.exp, "Session token issued.");
    Ok(format!("{}.{}", payload, signature))
  }

  pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
    self.verify_at(token, Utc::now())
  }

  /// Checks the signature, then the expiry, and returns the claims.
  pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
    let (payload, signature) = token.split_once('.').ok_or_else(invalid_token)?;
    let signature = URL_SAFE_NO_PAD.decode(signature).map_err(|_| invalid_token())?;

    let mut mac = self.mac()?;
    mac.update(payload.as_bytes());
    if mac.verify_slice(&signature).is_err() {
      warn!("Token signature mismatch.");
      return Err(invalid_token());
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| invalid_token())?;
    let claims: Claims = serde_json::from_slice(&bytes).map_err(|_| invalid_token())?;
    if claims.exp <= now.timestamp() {
      debug!(user_id = %claims.user_id, "Token expired.");
      return Err(invalid_token());
    }
    Ok(claims)
  }
}
