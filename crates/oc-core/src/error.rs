use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid occurrence status: {value} {location}")]
    InvalidOccurrenceStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid action: {value} {location}")]
    InvalidAction {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid resource: {value} {location}")]
    InvalidResource {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid permission '{value}': {message} {location}")]
    InvalidPermission {
        value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed permission set: {message} {location}")]
    MalformedPermissionSet {
        message: String,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
