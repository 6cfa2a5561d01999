use async_trait::async_trait;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetArticleUseCase: Send + Sync {
    async fn get_article(&self, article_id: Uuid) -> Result<Article, GetArticleError>;

    async fn get_author_articles(&self, author: UserId) -> Result<Vec<Article>, GetArticleError>;

    async fn count_saved_by(&self, article_id: Uuid) -> Result<u64, GetArticleError>;
}
