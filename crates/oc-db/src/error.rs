use oc_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Row decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
