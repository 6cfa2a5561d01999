use async_trait::async_trait;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Profile>, ProfileQueryError>;

    /// Most recently saved first.
    async fn saved_articles(&self, profile_id: Uuid) -> Result<Vec<Article>, ProfileQueryError>;
}
