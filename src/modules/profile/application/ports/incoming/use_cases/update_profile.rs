use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::domain::value_objects::Gender;
use crate::profile::application::ports::outgoing::PatchProfileData;
use crate::shared::domain::{ImageKind, ImageRef, PatchField, ValidationError};

/// Raw partial update. `Null` on `bio` resets it to empty; `Null` on
/// `gender` or `profile_picture` clears the column.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub bio: PatchField<String>,
    pub gender: PatchField<String>,
    pub profile_picture: PatchField<String>,
}

impl UpdateProfileCommand {
    pub fn validate(self) -> Result<PatchProfileData, ValidationError> {
        let bio = match self.bio {
            PatchField::Null => PatchField::Value(String::new()),
            other => other,
        };

        Ok(PatchProfileData {
            bio,
            gender: self.gender.try_map(|g| Gender::parse(&g))?,
            profile_picture: self
                .profile_picture
                .try_map(|v| ImageRef::parse_as(ImageKind::ProfilePicture, v))?,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<Profile, UpdateProfileError>;
}
