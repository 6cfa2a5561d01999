pub mod auth_groups;
pub mod auth_permissions;
pub mod group_permissions;
pub mod user_groups;
pub mod user_permissions;
