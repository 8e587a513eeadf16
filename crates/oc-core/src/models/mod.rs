pub mod action;
pub mod occurrence_status;
pub mod permission;
pub mod permission_set;
pub mod resource;
pub mod role;
pub mod user_account;
