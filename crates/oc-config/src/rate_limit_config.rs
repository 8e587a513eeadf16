use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Attempt-tracking constraints
pub const MIN_MAX_FAILED_ATTEMPTS: u32 = 1;
pub const MAX_MAX_FAILED_ATTEMPTS: u32 = 100;
pub const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 5;

pub const MIN_BLOCK_DURATION_SECS: u64 = 1;
pub const MAX_BLOCK_DURATION_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_BLOCK_DURATION_SECS: u64 = 15 * 60;

/// Configuration for failed-authentication rate limiting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Failed attempts within the window before a client is blocked
    pub max_failed_attempts: u32,
    /// Window duration in seconds, measured from a client's first failure
    pub block_duration_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
            block_duration_secs: DEFAULT_BLOCK_DURATION_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_failed_attempts < MIN_MAX_FAILED_ATTEMPTS
            || self.max_failed_attempts > MAX_MAX_FAILED_ATTEMPTS
        {
            return Err(ConfigError::config(format!(
                "rate_limit.max_failed_attempts must be {}-{}, got {}",
                MIN_MAX_FAILED_ATTEMPTS, MAX_MAX_FAILED_ATTEMPTS, self.max_failed_attempts
            )));
        }

        if self.block_duration_secs < MIN_BLOCK_DURATION_SECS
            || self.block_duration_secs > MAX_BLOCK_DURATION_SECS
        {
            return Err(ConfigError::config(format!(
                "rate_limit.block_duration_secs must be {}-{}, got {}",
                MIN_BLOCK_DURATION_SECS, MAX_BLOCK_DURATION_SECS, self.block_duration_secs
            )));
        }

        Ok(())
    }

    pub fn block_duration(&self) -> Duration {
        Duration::from_secs(self.block_duration_secs)
    }
}
