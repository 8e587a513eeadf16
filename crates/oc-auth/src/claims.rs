use crate::{AuthError, Result as AuthErrorResult};

use oc_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JWT claims carried by an identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id); older tokens carry it as `id`
    #[serde(alias = "id")]
    pub sub: String,
    /// Display name
    pub name: String,
    /// Account role
    pub role: Role,
    /// Permission set snapshot, in either stored encoding
    #[serde(default)]
    pub permissions: Value,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after signature verification.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 128 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
