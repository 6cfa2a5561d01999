use async_trait::async_trait;
use tracing::{info, warn};

use crate::article::application::domain::entities::Article;
use crate::article::application::ports::incoming::use_cases::{
    CreateArticleCommand, CreateArticleError, CreateArticleUseCase,
};
use crate::article::application::ports::outgoing::{ArticleRepository, ArticleRepositoryError};

pub struct CreateArticleService<R>
where
    R: ArticleRepository,
{
    article_repository: R,
}

impl<R> CreateArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(article_repository: R) -> Self {
        Self { article_repository }
    }
}

#[async_trait]
impl<R> CreateArticleUseCase for CreateArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(&self, command: CreateArticleCommand) -> Result<Article, CreateArticleError> {
        let author_id = command.author_id();

        let article = self
            .article_repository
            .create_article(command.into_data())
            .await
            .map_err(|e| match e {
                ArticleRepositoryError::AuthorNotFound => {
                    warn!(author_id = %author_id, "Article author does not exist");
                    CreateArticleError::AuthorNotFound
                }
                ArticleRepositoryError::DatabaseError(msg) => CreateArticleError::RepositoryError(msg),
                ArticleRepositoryError::NotFound => CreateArticleError::RepositoryError(
                    "unexpected not found while creating article".to_string(),
                ),
            })?;

        info!(article_id = %article.id, author_id = %author_id, "Article created");
        Ok(article)
    }
}
