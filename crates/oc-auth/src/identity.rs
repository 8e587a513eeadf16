use crate::Claims;

use oc_core::{Role, UserAccount};

use serde_json::Value;

/// Authenticated subject for one request.
///
/// Built by the gate from the stored account once the token has verified,
/// so the permission set reflects current state rather than the snapshot
/// embedded at issue time. Immutable for the request's lifetime.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject_id: String,
    pub name: String,
    pub role: Role,
    pub permissions: Value,
}

impl Identity {
    pub fn from_account(account: UserAccount) -> Self {
        Self {
            subject_id: account.id,
            name: account.name,
            role: account.role,
            permissions: account.permissions,
        }
    }

    pub fn from_claims(claims: Claims) -> Self {
        Self {
            subject_id: claims.sub,
            name: claims.name,
            role: claims.role,
            permissions: claims.permissions,
        }
    }
}
