use async_trait::async_trait;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::article::application::domain::value_objects::{ArticleRatings, Rating};
use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{ImageRef, PatchField};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateArticleData {
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub image: Option<ImageRef>,
    pub ratings: ArticleRatings,
}

/// Already validated changes. `title` and `content` are never `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchArticleData {
    pub title: PatchField<String>,
    pub content: PatchField<String>,
    pub image: PatchField<ImageRef>,
    pub cleanliness_rating: PatchField<Rating>,
    pub affordability_rating: PatchField<Rating>,
    pub service_rating: PatchField<Rating>,
}

impl PatchArticleData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.content.is_unset()
            && self.image.is_unset()
            && self.cleanliness_rating.is_unset()
            && self.affordability_rating.is_unset()
            && self.service_rating.is_unset()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArticleRepositoryError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Article not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn create_article(
        &self,
        data: CreateArticleData,
    ) -> Result<Article, ArticleRepositoryError>;

    /// Only matches articles written by `author`.
    async fn patch_article(
        &self,
        author: UserId,
        article_id: Uuid,
        data: PatchArticleData,
    ) -> Result<Article, ArticleRepositoryError>;

    /// Removes saved-article links first, then the article.
    async fn delete_article(
        &self,
        author: UserId,
        article_id: Uuid,
    ) -> Result<(), ArticleRepositoryError>;
}
