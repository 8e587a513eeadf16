use crate::{ConfigError, ConfigErrorResult};

use std::ops::Deref;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Verbosity threshold handed to the embedding binary's log sink.
///
/// Parsing is strict: an unknown name is a configuration error, the same
/// way the other sections reject out-of-range values, rather than a silent
/// fallback that would mask a typo in `config.toml`.
#[derive(Debug, Clone, Copy)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(crate::DEFAULT_LOG_LEVEL)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "off" => Ok(LogLevel(LevelFilter::Off)),
            "error" => Ok(LogLevel(LevelFilter::Error)),
            "warn" => Ok(LogLevel(LevelFilter::Warn)),
            "info" => Ok(LogLevel(LevelFilter::Info)),
            "debug" => Ok(LogLevel(LevelFilter::Debug)),
            "trace" => Ok(LogLevel(LevelFilter::Trace)),
            _ => Err(ConfigError::Generic {
                category: "Logging",
                message: format!(
                    "unknown log level '{s}' (expected off, error, warn, info, debug or trace)"
                ),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
