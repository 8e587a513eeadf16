use crate::Role;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stored identity record, as read from the user store.
///
/// `permissions` stays a raw JSON value here: shape validation happens at
/// evaluation time so a corrupt record is reported as such instead of being
/// dropped by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
    #[serde(default)]
    pub permissions: Value,
}
