use crate::Result as DbResult;

use oc_core::UserAccount;

use async_trait::async_trait;

/// Read-side boundary to the identity store.
///
/// The access gate is the only consumer; it wraps every call in
/// [`crate::with_retry`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up an account by its opaque subject id.
    async fn find_by_id(&self, id: &str) -> DbResult<Option<UserAccount>>;
}
