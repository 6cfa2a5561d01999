pub mod authorization_query;
pub mod group_repository;
pub mod membership_repository;
pub mod permission_repository;

pub use authorization_query::{AuthorizationQuery, AuthorizationQueryError};
pub use group_repository::{GroupRepository, GroupRepositoryError};
pub use membership_repository::{MembershipRepository, MembershipRepositoryError};
pub use permission_repository::{
    CreatePermissionData, PermissionRepository, PermissionRepositoryError,
};
