use crate::{AuthError, Identity, Result as AuthErrorResult};

use oc_core::{ErrorLocation, Permission, PermissionSet};

use std::panic::Location;

/// Decide whether `identity` may perform `required`.
///
/// The admin bypass is a guard clause evaluated before any permission-set
/// parsing, so a malformed set on an admin account never surfaces as an
/// error. For everyone else a set that fits neither recognized shape is a
/// distinct `MalformedPermissionSet` failure: callers must be able to tell
/// "denied by policy" apart from "identity record is corrupt".
///
/// Deterministic and free of I/O.
#[track_caller]
pub fn authorize(identity: &Identity, required: &Permission) -> AuthErrorResult<bool> {
    if identity.role.is_admin() {
        return Ok(true);
    }

    let set = PermissionSet::from_value(&identity.permissions).map_err(|source| {
        AuthError::MalformedPermissionSet {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(set.allows(required))
}
