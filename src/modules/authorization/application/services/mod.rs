mod check_permission_service;
mod create_group_service;
mod create_permission_service;
mod manage_membership_service;

pub use check_permission_service::CheckPermissionService;
pub use create_group_service::CreateGroupService;
pub use create_permission_service::CreatePermissionService;
pub use manage_membership_service::ManageMembershipService;
