use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::domain::value_objects::Gender;
use crate::profile::application::ports::outgoing::CreateProfileData;
use crate::shared::domain::{ImageKind, ImageRef, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    user_id: UserId,
    bio: String,
    gender: Option<Gender>,
    profile_picture: Option<ImageRef>,
}

impl CreateProfileCommand {
    /// Empty bio, no gender, no picture.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            bio: String::new(),
            gender: None,
            profile_picture: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Result<Self, ValidationError> {
        self.gender = Some(Gender::parse(gender)?);
        Ok(self)
    }

    pub fn with_profile_picture(mut self, image_ref: &str) -> Result<Self, ValidationError> {
        self.profile_picture = Some(ImageRef::parse_as(ImageKind::ProfilePicture, image_ref)?);
        Ok(self)
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn into_data(self) -> CreateProfileData {
        CreateProfileData {
            user_id: self.user_id,
            bio: self.bio,
            gender: self.gender,
            profile_picture: self.profile_picture,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(&self, command: CreateProfileCommand) -> Result<Profile, CreateProfileError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_defaults() {
        let data = CreateProfileCommand::new(UserId::new()).into_data();

        assert_eq!(data.bio, "");
        assert!(data.gender.is_none());
        assert!(data.profile_picture.is_none());
    }

    #[test]
    fn test_builder_validates_gender_and_picture() {
        let command = CreateProfileCommand::new(UserId::new())
            .with_bio("Backpacker")
            .with_gender("F")
            .unwrap()
            .with_profile_picture("profile_pics/me.png")
            .unwrap();
        let data = command.into_data();

        assert_eq!(data.gender, Some(Gender::Female));
        assert_eq!(data.bio, "Backpacker");

        assert!(CreateProfileCommand::new(UserId::new()).with_gender("Z").is_err());
        assert!(CreateProfileCommand::new(UserId::new())
            .with_profile_picture("/abs.png")
            .is_err());
        assert!(CreateProfileCommand::new(UserId::new())
            .with_profile_picture("article_images/me.png")
            .is_err());
    }
}
