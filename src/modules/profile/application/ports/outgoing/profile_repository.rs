use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::domain::value_objects::Gender;
use crate::shared::domain::{ImageRef, PatchField};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProfileData {
    pub user_id: UserId,
    pub bio: String,
    pub gender: Option<Gender>,
    pub profile_picture: Option<ImageRef>,
}

/// Already validated changes. `bio` is never `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProfileData {
    pub bio: PatchField<String>,
    pub gender: PatchField<Gender>,
    pub profile_picture: PatchField<ImageRef>,
}

impl PatchProfileData {
    pub fn is_empty(&self) -> bool {
        self.bio.is_unset() && self.gender.is_unset() && self.profile_picture.is_unset()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Article not found")]
    ArticleNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Profiles are addressed by their owner; a user has at most one.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn patch_profile(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Adds `delta` to the stored points, saturating at the i32 bounds.
    async fn adjust_points(
        &self,
        user_id: UserId,
        delta: i32,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Saving an already saved article is a no-op.
    async fn save_article(
        &self,
        user_id: UserId,
        article_id: Uuid,
    ) -> Result<(), ProfileRepositoryError>;

    /// Unsaving an article that was never saved is a no-op.
    async fn unsave_article(
        &self,
        user_id: UserId,
        article_id: Uuid,
    ) -> Result<(), ProfileRepositoryError>;
}
