use async_trait::async_trait;

use crate::article::application::domain::entities::Article;
use crate::article::application::domain::value_objects::{
    ArticleContent, ArticleRatings, ArticleTitle,
};
use crate::article::application::ports::outgoing::CreateArticleData;
use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{ImageKind, ImageRef, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    author_id: UserId,
    title: String,
    content: String,
    image: Option<ImageRef>,
    ratings: ArticleRatings,
}

impl CreateArticleCommand {
    /// Ratings default to 1 and no image is attached.
    pub fn new(author_id: UserId, title: &str, content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            author_id,
            title: ArticleTitle::parse(title)?.into_inner(),
            content: ArticleContent::parse(content)?.into_inner(),
            image: None,
            ratings: ArticleRatings::default(),
        })
    }

    pub fn with_ratings(
        mut self,
        cleanliness: i32,
        affordability: i32,
        service: i32,
    ) -> Result<Self, ValidationError> {
        self.ratings = ArticleRatings::new(cleanliness, affordability, service)?;
        Ok(self)
    }

    pub fn with_image(mut self, image_ref: &str) -> Result<Self, ValidationError> {
        self.image = Some(ImageRef::parse_as(ImageKind::ArticleImage, image_ref)?);
        Ok(self)
    }

    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn into_data(self) -> CreateArticleData {
        CreateArticleData {
            author_id: self.author_id,
            title: self.title,
            content: self.content,
            image: self.image,
            ratings: self.ratings,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateArticleError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateArticleUseCase: Send + Sync {
    async fn execute(&self, command: CreateArticleCommand) -> Result<Article, CreateArticleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let command = CreateArticleCommand::new(UserId::new(), " Bali ", "Lovely beaches").unwrap();

        assert_eq!(command.title(), "Bali");
        let data = command.into_data();
        assert_eq!(data.ratings, ArticleRatings::default());
        assert!(data.image.is_none());
    }

    #[test]
    fn test_builder_validates_ratings_and_image() {
        let base = CreateArticleCommand::new(UserId::new(), "Bali", "Lovely").unwrap();

        assert!(base.clone().with_ratings(5, 4, 3).is_ok());
        assert!(matches!(
            base.clone().with_ratings(5, 4, 9),
            Err(ValidationError::RatingOutOfRange { field: "service_rating", value: 9 })
        ));
        assert!(base.clone().with_image("article_images/bali.jpg").is_ok());
        assert!(base.clone().with_image("profile_pics/bali.jpg").is_err());
        assert!(base.with_image("../bali.jpg").is_err());
    }

    #[test]
    fn test_missing_title_or_content() {
        assert!(matches!(
            CreateArticleCommand::new(UserId::new(), "", "body"),
            Err(ValidationError::Required("title"))
        ));
        assert!(matches!(
            CreateArticleCommand::new(UserId::new(), "Title", ""),
            Err(ValidationError::Required("content"))
        ));
    }
}
