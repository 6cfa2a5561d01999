use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::auth::application::domain::entities::UserId;
use crate::authorization::application::domain::entities::Group;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckPermissionError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CheckPermissionUseCase: Send + Sync {
    /// Effective codenames. Inactive users have none; active superusers have all.
    async fn all_permissions(&self, user_id: UserId)
        -> Result<BTreeSet<String>, CheckPermissionError>;

    async fn has_permission(
        &self,
        user_id: UserId,
        codename: &str,
    ) -> Result<bool, CheckPermissionError>;

    async fn user_groups(&self, user_id: UserId) -> Result<Vec<Group>, CheckPermissionError>;
}
