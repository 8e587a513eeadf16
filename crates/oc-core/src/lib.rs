pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::action::Action;
pub use models::occurrence_status::OccurrenceStatus;
pub use models::permission::Permission;
pub use models::permission_set::{PermissionSet, ResourceCapabilities};
pub use models::resource::Resource;
pub use models::role::Role;
pub use models::user_account::UserAccount;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
