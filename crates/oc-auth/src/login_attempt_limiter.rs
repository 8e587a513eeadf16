use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 5;
pub const DEFAULT_BLOCK_DURATION_SECS: u64 = 15 * 60;

/// Configuration for failed-authentication tracking.
#[derive(Debug, Clone)]
pub struct AttemptLimitConfig {
    /// Failures within the window before a client is blocked
    pub max_failed_attempts: u32,
    /// Window measured from a client's first failure
    pub block_duration: Duration,
}

impl Default for AttemptLimitConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
            block_duration: Duration::from_secs(DEFAULT_BLOCK_DURATION_SECS),
        }
    }
}

impl From<&oc_config::RateLimitConfig> for AttemptLimitConfig {
    fn from(config: &oc_config::RateLimitConfig) -> Self {
        Self {
            max_failed_attempts: config.max_failed_attempts,
            block_duration: config.block_duration(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct AttemptEntry {
    first_attempt_at: Instant,
    failure_count: u32,
}

/// Per-client failed-authentication tracker.
///
/// One shared in-memory table keyed by client identifier (typically the
/// originating IP). State is process-local; a restart legitimately clears
/// it. The lock serializes read-modify-write of a client's count so racing
/// failures never under-count. An entry never outlives `block_duration`
/// past its first failure.
pub struct LoginAttemptLimiter {
    config: AttemptLimitConfig,
    entries: Mutex<HashMap<String, AttemptEntry>>,
}

impl LoginAttemptLimiter {
    pub fn new(config: AttemptLimitConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Whether `client_key` may attempt authentication right now.
    ///
    /// Clears the client's entry when its window has elapsed, regardless
    /// of the count it reached.
    pub fn allow(&self, client_key: &str) -> bool {
        self.allow_at(client_key, Instant::now())
    }

    /// Record a failed authentication attempt for `client_key`.
    pub fn record_failure(&self, client_key: &str) {
        self.record_failure_at(client_key, Instant::now());
    }

    /// A successful authentication forgives prior failures.
    pub fn record_success(&self, client_key: &str) {
        self.lock_entries().remove(client_key);
    }

    /// Current failure count for `client_key` (diagnostics).
    pub fn failure_count(&self, client_key: &str) -> u32 {
        self.lock_entries()
            .get(client_key)
            .map_or(0, |entry| entry.failure_count)
    }

    pub(crate) fn allow_at(&self, client_key: &str, now: Instant) -> bool {
        let mut entries = self.lock_entries();
        match entries.get(client_key) {
            None => true,
            Some(entry) => {
                if now.duration_since(entry.first_attempt_at) >= self.config.block_duration {
                    entries.remove(client_key);
                    true
                } else {
                    entry.failure_count < self.config.max_failed_attempts
                }
            }
        }
    }

    pub(crate) fn record_failure_at(&self, client_key: &str, now: Instant) {
        let mut entries = self.lock_entries();
        let entry = entries
            .entry(client_key.to_string())
            .and_modify(|entry| {
                if now.duration_since(entry.first_attempt_at) >= self.config.block_duration {
                    // Expired window: start a fresh one
                    entry.first_attempt_at = now;
                    entry.failure_count = 1;
                } else {
                    entry.failure_count += 1;
                }
            })
            .or_insert(AttemptEntry {
                first_attempt_at: now,
                failure_count: 1,
            });

        if entry.failure_count == self.config.max_failed_attempts {
            log::warn!(
                "client {} blocked after {} failed attempts",
                client_key,
                entry.failure_count
            );
        }
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, AttemptEntry>> {
        // A poisoned lock still holds valid counts
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for LoginAttemptLimiter {
    fn default() -> Self {
        Self::new(AttemptLimitConfig::default())
    }
}
