mod auth_config;
mod config;
mod error;
mod log_level;
mod rate_limit_config;
mod retry_config;

pub use auth_config::AuthConfig;
pub use config::{Config, DatabaseConfig, LoggingConfig};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use rate_limit_config::RateLimitConfig;
pub use retry_config::RetryConfig;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
