use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::article::application::ports::incoming::use_cases::{
    DeleteArticleError, DeleteArticleUseCase,
};
use crate::article::application::ports::outgoing::{ArticleRepository, ArticleRepositoryError};
use crate::auth::application::domain::entities::UserId;

pub struct DeleteArticleService<R>
where
    R: ArticleRepository,
{
    article_repository: R,
}

impl<R> DeleteArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(article_repository: R) -> Self {
        Self { article_repository }
    }
}

#[async_trait]
impl<R> DeleteArticleUseCase for DeleteArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(&self, author: UserId, article_id: Uuid) -> Result<(), DeleteArticleError> {
        self.article_repository
            .delete_article(author, article_id)
            .await
            .map_err(|e| match e {
                ArticleRepositoryError::NotFound | ArticleRepositoryError::AuthorNotFound => {
                    DeleteArticleError::NotFound
                }
                ArticleRepositoryError::DatabaseError(msg) => {
                    DeleteArticleError::RepositoryError(msg)
                }
            })?;

        info!(article_id = %article_id, "Article deleted");
        Ok(())
    }
}
