use async_trait::async_trait;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::article::application::domain::value_objects::{ArticleContent, ArticleTitle, Rating};
use crate::article::application::ports::outgoing::PatchArticleData;
use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{ImageKind, ImageRef, PatchField, ValidationError};

/// Raw partial update. `Null` clears the image; `Null` on any other field is rejected.
#[derive(Debug, Clone, Default)]
pub struct PatchArticleCommand {
    pub title: PatchField<String>,
    pub content: PatchField<String>,
    pub image: PatchField<String>,
    pub cleanliness_rating: PatchField<i32>,
    pub affordability_rating: PatchField<i32>,
    pub service_rating: PatchField<i32>,
}

fn non_null<T>(field: &'static str, value: PatchField<T>) -> Result<PatchField<T>, ValidationError> {
    if value.is_null() {
        return Err(ValidationError::Required(field));
    }
    Ok(value)
}

fn rating(field: &'static str, value: PatchField<i32>) -> Result<PatchField<Rating>, ValidationError> {
    non_null(field, value)?.try_map(|v| Rating::new(field, v))
}

impl PatchArticleCommand {
    pub fn validate(self) -> Result<PatchArticleData, ValidationError> {
        Ok(PatchArticleData {
            title: non_null("title", self.title)?
                .try_map(|t| ArticleTitle::parse(&t).map(ArticleTitle::into_inner))?,
            content: non_null("content", self.content)?
                .try_map(|c| ArticleContent::parse(&c).map(ArticleContent::into_inner))?,
            image: self
                .image
                .try_map(|v| ImageRef::parse_as(ImageKind::ArticleImage, v))?,
            cleanliness_rating: rating("cleanliness_rating", self.cleanliness_rating)?,
            affordability_rating: rating("affordability_rating", self.affordability_rating)?,
            service_rating: rating("service_rating", self.service_rating)?,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchArticleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Article not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchArticleUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        article_id: Uuid,
        command: PatchArticleCommand,
    ) -> Result<Article, PatchArticleError>;
}
