use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_JWT_SECRET_LEN: usize = 32;

pub const MIN_TOKEN_TTL_SECS: u64 = 60;
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required: without it no token can ever be
    /// verified, so a missing secret fails validation at startup.
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens in seconds
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set OC_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LEN => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_LEN,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_secs < MIN_TOKEN_TTL_SECS || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}
