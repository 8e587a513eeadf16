pub mod error;
pub mod retry;
pub mod sqlite_user_store;
pub mod user_store;

pub use error::{DbError, Result};
pub use retry::{RetryPolicy, with_retry};
pub use sqlite_user_store::SqliteUserStore;
pub use user_store::UserStore;
