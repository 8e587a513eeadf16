use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Retry constraints
pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const MIN_BASE_DELAY_MS: u64 = 10;
pub const MAX_BASE_DELAY_MS: u64 = 10000;
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

pub const MIN_BACKOFF_MULTIPLIER: f64 = 1.0;
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Retry configuration for transient storage failures.
///
/// Exponential backoff, no jitter: attempt *n* waits
/// `base_delay * multiplier^(n-1)` before the next try.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial attempt)
    pub max_attempts: u32,
    /// Delay before the first retry in milliseconds
    pub base_delay_ms: u64,
    /// Multiplier for exponential backoff (e.g., 2.0 = double each time)
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_attempts < MIN_MAX_ATTEMPTS || self.max_attempts > MAX_MAX_ATTEMPTS {
            return Err(ConfigError::config(format!(
                "retry.max_attempts must be {}-{}, got {}",
                MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS, self.max_attempts
            )));
        }

        if self.base_delay_ms < MIN_BASE_DELAY_MS || self.base_delay_ms > MAX_BASE_DELAY_MS {
            return Err(ConfigError::config(format!(
                "retry.base_delay_ms must be {}-{}, got {}",
                MIN_BASE_DELAY_MS, MAX_BASE_DELAY_MS, self.base_delay_ms
            )));
        }

        if self.backoff_multiplier < MIN_BACKOFF_MULTIPLIER
            || self.backoff_multiplier > MAX_BACKOFF_MULTIPLIER
        {
            return Err(ConfigError::config(format!(
                "retry.backoff_multiplier must be {}-{}, got {}",
                MIN_BACKOFF_MULTIPLIER, MAX_BACKOFF_MULTIPLIER, self.backoff_multiplier
            )));
        }

        Ok(())
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}
