use async_trait::async_trait;

use crate::authorization::application::domain::entities::Group;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupRepositoryError {
    #[error("A group with this name already exists")]
    GroupAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create_group(&self, name: String) -> Result<Group, GroupRepositoryError>;
}
