use async_trait::async_trait;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SavedArticlesError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Article not found")]
    ArticleNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SavedArticlesUseCase: Send + Sync {
    async fn save(&self, user_id: UserId, article_id: Uuid) -> Result<(), SavedArticlesError>;

    async fn unsave(&self, user_id: UserId, article_id: Uuid) -> Result<(), SavedArticlesError>;

    async fn list(&self, user_id: UserId) -> Result<Vec<Article>, SavedArticlesError>;
}
