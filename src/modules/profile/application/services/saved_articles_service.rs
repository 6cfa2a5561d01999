use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::incoming::use_cases::{
    SavedArticlesError, SavedArticlesUseCase,
};
use crate::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError,
};

impl From<ProfileRepositoryError> for SavedArticlesError {
    fn from(e: ProfileRepositoryError) -> Self {
        match e {
            ProfileRepositoryError::ProfileNotFound => SavedArticlesError::ProfileNotFound,
            ProfileRepositoryError::ArticleNotFound => SavedArticlesError::ArticleNotFound,
            ProfileRepositoryError::DatabaseError(msg) => SavedArticlesError::RepositoryError(msg),
            other => SavedArticlesError::RepositoryError(other.to_string()),
        }
    }
}

impl From<ProfileQueryError> for SavedArticlesError {
    fn from(e: ProfileQueryError) -> Self {
        match e {
            ProfileQueryError::DatabaseError(msg) => SavedArticlesError::RepositoryError(msg),
        }
    }
}

pub struct SavedArticlesService<R, Q>
where
    R: ProfileRepository,
    Q: ProfileQuery,
{
    profile_repository: R,
    profile_query: Q,
}

impl<R, Q> SavedArticlesService<R, Q>
where
    R: ProfileRepository,
    Q: ProfileQuery,
{
    pub fn new(profile_repository: R, profile_query: Q) -> Self {
        Self {
            profile_repository,
            profile_query,
        }
    }
}

#[async_trait]
impl<R, Q> SavedArticlesUseCase for SavedArticlesService<R, Q>
where
    R: ProfileRepository + Send + Sync,
    Q: ProfileQuery + Send + Sync,
{
    async fn save(&self, user_id: UserId, article_id: Uuid) -> Result<(), SavedArticlesError> {
        self.profile_repository
            .save_article(user_id, article_id)
            .await
            .map_err(|e| {
                warn!(user_id = %user_id, article_id = %article_id, error = %e, "Save article rejected");
                SavedArticlesError::from(e)
            })?;

        info!(user_id = %user_id, article_id = %article_id, "Article saved");
        Ok(())
    }

    async fn unsave(&self, user_id: UserId, article_id: Uuid) -> Result<(), SavedArticlesError> {
        self.profile_repository
            .unsave_article(user_id, article_id)
            .await?;

        info!(user_id = %user_id, article_id = %article_id, "Article unsaved");
        Ok(())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Article>, SavedArticlesError> {
        let profile = self
            .profile_query
            .find_by_user(user_id)
            .await?
            .ok_or(SavedArticlesError::ProfileNotFound)?;

        Ok(self.profile_query.saved_articles(profile.id).await?)
    }
}
