use crate::{Action, CoreError, CoreResult, Permission};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-resource capability record used by the map-shaped encoding.
///
/// Absent fields default to false, so a record that only lists `read`
/// denies everything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResourceCapabilities {
    pub read: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    pub upload: bool,
}

impl ResourceCapabilities {
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Read => self.read,
            Action::Create => self.create,
            Action::Update => self.update,
            Action::Delete => self.delete,
            Action::Upload => self.upload,
        }
    }
}

/// A user's permission set, in either of the two stored encodings.
///
/// Accounts carry either a flat list of `action:resource` strings or a map
/// from resource name to a capability record. Both normalize to the same
/// membership query through [`PermissionSet::allows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSet {
    /// Flat `["read:ocorrencia", ...]` list.
    List(Vec<String>),
    /// `{"ocorrencia": {"read": true, ...}, ...}` capability map.
    Map(BTreeMap<String, ResourceCapabilities>),
}

impl PermissionSet {
    /// Normalize a raw JSON value into one of the two recognized shapes.
    ///
    /// Anything else (a bare string, a number, an array with non-string
    /// elements, a map whose values are not capability records) is a
    /// data-integrity error, never an implicit empty set: a corrupted
    /// record must surface so an operator can repair it.
    #[track_caller]
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        match value {
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => entries.push(s.clone()),
                        other => {
                            return Err(CoreError::MalformedPermissionSet {
                                message: format!(
                                    "permission list entry is not a string: {other}"
                                ),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                    }
                }
                Ok(Self::List(entries))
            }
            Value::Object(map) => {
                let mut entries = BTreeMap::new();
                for (resource, record) in map {
                    let caps: ResourceCapabilities = serde_json::from_value(record.clone())
                        .map_err(|e| CoreError::MalformedPermissionSet {
                            message: format!("capability record for '{resource}': {e}"),
                            location: ErrorLocation::from(Location::caller()),
                        })?;
                    entries.insert(resource.clone(), caps);
                }
                Ok(Self::Map(entries))
            }
            other => Err(CoreError::MalformedPermissionSet {
                message: format!("expected array or object, got {other}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Whether this set grants `required`, regardless of encoding.
    pub fn allows(&self, required: &Permission) -> bool {
        match self {
            Self::List(entries) => {
                let needle = required.as_string();
                entries.iter().any(|entry| entry == &needle)
            }
            Self::Map(entries) => entries
                .get(required.resource.as_str())
                .is_some_and(|caps| caps.allows(required.action)),
        }
    }
}
