use async_trait::async_trait;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::article::application::ports::incoming::use_cases::{GetArticleError, GetArticleUseCase};
use crate::article::application::ports::outgoing::{ArticleQuery, ArticleQueryError};
use crate::auth::application::domain::entities::UserId;

impl From<ArticleQueryError> for GetArticleError {
    fn from(e: ArticleQueryError) -> Self {
        match e {
            ArticleQueryError::DatabaseError(msg) => GetArticleError::RepositoryError(msg),
        }
    }
}

pub struct GetArticleService<Q>
where
    Q: ArticleQuery,
{
    article_query: Q,
}

impl<Q> GetArticleService<Q>
where
    Q: ArticleQuery,
{
    pub fn new(article_query: Q) -> Self {
        Self { article_query }
    }
}

#[async_trait]
impl<Q> GetArticleUseCase for GetArticleService<Q>
where
    Q: ArticleQuery + Send + Sync,
{
    async fn get_article(&self, article_id: Uuid) -> Result<Article, GetArticleError> {
        self.article_query
            .find_by_id(article_id)
            .await?
            .ok_or(GetArticleError::NotFound)
    }

    async fn get_author_articles(&self, author: UserId) -> Result<Vec<Article>, GetArticleError> {
        Ok(self.article_query.list_by_author(author).await?)
    }

    async fn count_saved_by(&self, article_id: Uuid) -> Result<u64, GetArticleError> {
        if self.article_query.find_by_id(article_id).await?.is_none() {
            return Err(GetArticleError::NotFound);
        }
        Ok(self.article_query.count_saved_by(article_id).await?)
    }
}
