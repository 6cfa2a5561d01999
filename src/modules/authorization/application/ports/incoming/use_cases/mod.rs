mod check_permission;
mod create_group;
mod create_permission;
mod manage_membership;

pub use check_permission::{CheckPermissionError, CheckPermissionUseCase};
pub use create_group::{CreateGroupError, CreateGroupUseCase};
pub use create_permission::{CreatePermissionCommand, CreatePermissionError, CreatePermissionUseCase};
pub use manage_membership::{ManageMembershipError, ManageMembershipUseCase};
