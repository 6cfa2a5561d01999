use async_trait::async_trait;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArticleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ArticleQuery: Send + Sync {
    async fn find_by_id(&self, article_id: Uuid) -> Result<Option<Article>, ArticleQueryError>;

    /// Newest first.
    async fn list_by_author(&self, author: UserId) -> Result<Vec<Article>, ArticleQueryError>;

    /// Number of profiles that saved the article.
    async fn count_saved_by(&self, article_id: Uuid) -> Result<u64, ArticleQueryError>;
}
