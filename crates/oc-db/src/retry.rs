use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Retry policy for persistence operations.
///
/// Attempt *n* is followed by a `base_delay * multiplier^(n-1)` wait; there
/// is no wait after the final attempt and no jitter.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the initial one
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Multiplier applied to the delay after each failed attempt
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }
}

impl From<&oc_config::RetryConfig> for RetryPolicy {
    fn from(config: &oc_config::RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            base_delay: config.base_delay(),
            backoff_multiplier: config.backoff_multiplier,
        }
    }
}

/// Execute an async operation with bounded exponential-backoff retry.
///
/// Every error is treated as retryable: the wrapper does not classify
/// failures, so a constraint violation burns through all attempts before it
/// surfaces. Classification belongs to the caller; the final attempt's
/// error is returned unchanged so the caller can still tell, say, a
/// uniqueness violation from a connection failure.
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempts = 0;
    let mut delay = policy.base_delay;

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    log::info!("{} succeeded after {} attempts", operation_name, attempts);
                }
                return Ok(result);
            }
            Err(e) => {
                if attempts >= policy.max_attempts {
                    log::warn!(
                        "{} failed after {} attempts: {}",
                        operation_name,
                        attempts,
                        e
                    );
                    return Err(e);
                }

                log::debug!(
                    "{} attempt {} failed: {}. Retrying in {:?}",
                    operation_name,
                    attempts,
                    e,
                    delay
                );

                sleep(delay).await;

                delay = Duration::from_secs_f64(delay.as_secs_f64() * policy.backoff_multiplier);
            }
        }
    }
}
