use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, LogLevel, RateLimitConfig, RetryConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

/// `[database]` section: where the SQLite file lives, relative to the
/// config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: crate::DEFAULT_DATABASE_FILENAME.to_string(),
        }
    }
}

/// `[logging]` section. This crate only carries the threshold; the
/// embedding binary owns the sink.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for OC_CONFIG_DIR env var, else use ./.oc/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply OC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: OC_CONFIG_DIR env var > ./.oc/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("OC_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".oc"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.auth.validate()?;
        self.rate_limit.validate()?;
        self.retry.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);

        info!(
            "  auth: secret {}, token ttl={}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "UNSET"
            },
            self.auth.token_ttl_secs
        );

        info!(
            "  rate_limit: {} failures / {}s window",
            self.rate_limit.max_failed_attempts, self.rate_limit.block_duration_secs
        );

        info!(
            "  retry: attempts={}, base={}ms, backoff={}x",
            self.retry.max_attempts, self.retry.base_delay_ms, self.retry.backoff_multiplier
        );

        info!("  logging: {}", *self.logging.level);
    }

    fn apply_env_overrides(&mut self) {
        // Auth
        Self::apply_env_option_string("OC_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("OC_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Database
        Self::apply_env_string("OC_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("OC_LOG_LEVEL", &mut self.logging.level);

        // Rate limit
        Self::apply_env_parse(
            "OC_RATE_LIMIT_MAX_FAILED_ATTEMPTS",
            &mut self.rate_limit.max_failed_attempts,
        );
        Self::apply_env_parse(
            "OC_RATE_LIMIT_BLOCK_DURATION_SECS",
            &mut self.rate_limit.block_duration_secs,
        );

        // Retry
        Self::apply_env_parse("OC_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse("OC_RETRY_BASE_DELAY_MS", &mut self.retry.base_delay_ms);
        Self::apply_env_parse(
            "OC_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(value) = std::env::var(key) {
            *target = value;
        }
    }

    fn apply_env_option_string(key: &str, target: &mut Option<String>) {
        if let Ok(value) = std::env::var(key) {
            *target = Some(value);
        }
    }

    fn apply_env_parse<T: FromStr>(key: &str, target: &mut T) {
        if let Ok(value) = std::env::var(key)
            && let Ok(parsed) = value.parse()
        {
            *target = parsed;
        }
    }
}
