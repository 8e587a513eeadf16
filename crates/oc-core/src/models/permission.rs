use crate::{Action, CoreError, CoreResult, Resource};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A single capability: one action on one resource.
///
/// Renders as `action:resource`, the form used both in flat permission
/// lists and in route requirements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Permission {
    pub action: Action,
    pub resource: Resource,
}

impl Permission {
    pub fn new(action: Action, resource: Resource) -> Self {
        Self { action, resource }
    }

    pub fn as_string(&self) -> String {
        format!("{}:{}", self.action.as_str(), self.resource.as_str())
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    #[track_caller]
    fn from_str(value: &str) -> CoreResult<Self> {
        let (action, resource) =
            value
                .split_once(':')
                .ok_or_else(|| CoreError::InvalidPermission {
                    value: value.to_string(),
                    message: "expected 'action:resource'".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(Self {
            action: action.parse()?,
            resource: resource.parse()?,
        })
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.action.as_str(), self.resource.as_str())
    }
}
