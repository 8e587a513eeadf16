mod occurrence_status;
mod permission;
mod permission_set;
mod role;
