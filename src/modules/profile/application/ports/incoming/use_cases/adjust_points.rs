use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdjustPointsError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Awarding policy lives with the caller; this only applies a signed delta.
#[async_trait]
pub trait AdjustPointsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, delta: i32) -> Result<Profile, AdjustPointsError>;
}
