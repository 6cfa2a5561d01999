use async_trait::async_trait;

use crate::authorization::application::domain::entities::Group;
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateGroupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A group with this name already exists")]
    GroupAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateGroupUseCase: Send + Sync {
    async fn execute(&self, name: &str) -> Result<Group, CreateGroupError>;
}
