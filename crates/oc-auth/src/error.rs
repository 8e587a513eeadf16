use crate::DenyReason;

use oc_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Token- and permission-level failures inside the auth core.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token signature invalid {location}")]
    TokenSignatureInvalid { location: ErrorLocation },

    #[error("Malformed token: {source} {location}")]
    TokenMalformed {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token encode failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed permission set: {source} {location}")]
    MalformedPermissionSet {
        #[source]
        source: oc_core::CoreError,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// Outcome surface of the access gate.
///
/// Rate-limit and token failures never escape the gate as `AuthError`s;
/// they become `Denied` values with a precise [`DenyReason`]. Storage
/// errors pass through unchanged so callers can still classify them.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Access denied: {reason} {location}")]
    Denied {
        reason: DenyReason,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Store(#[from] oc_db::DbError),
}

impl GateError {
    #[track_caller]
    pub fn denied(reason: DenyReason) -> Self {
        Self::Denied {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Denied { reason, .. } => Some(*reason),
            Self::Store(_) => None,
        }
    }
}
