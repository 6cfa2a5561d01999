use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MembershipRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Permission not found")]
    PermissionNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Link tables between users, groups and permissions.
/// Adds are idempotent; removals of absent links succeed silently.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn add_user_to_group(
        &self,
        user_id: UserId,
        group_id: Uuid,
    ) -> Result<(), MembershipRepositoryError>;

    async fn remove_user_from_group(
        &self,
        user_id: UserId,
        group_id: Uuid,
    ) -> Result<(), MembershipRepositoryError>;

    async fn grant_user_permission(
        &self,
        user_id: UserId,
        permission_id: Uuid,
    ) -> Result<(), MembershipRepositoryError>;

    async fn revoke_user_permission(
        &self,
        user_id: UserId,
        permission_id: Uuid,
    ) -> Result<(), MembershipRepositoryError>;

    async fn grant_group_permission(
        &self,
        group_id: Uuid,
        permission_id: Uuid,
    ) -> Result<(), MembershipRepositoryError>;
}
