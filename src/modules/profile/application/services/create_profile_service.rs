use async_trait::async_trait;
use tracing::{info, warn};

use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileCommand, CreateProfileError, CreateProfileUseCase,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

pub struct CreateProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> CreateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> CreateProfileUseCase for CreateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProfileCommand) -> Result<Profile, CreateProfileError> {
        let user_id = command.user_id();

        let profile = self
            .profile_repository
            .create_profile(command.into_data())
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::UserNotFound => {
                    warn!(user_id = %user_id, "Profile owner does not exist");
                    CreateProfileError::UserNotFound
                }
                ProfileRepositoryError::ProfileAlreadyExists => {
                    warn!(user_id = %user_id, "User already has a profile");
                    CreateProfileError::ProfileAlreadyExists
                }
                ProfileRepositoryError::DatabaseError(msg) => CreateProfileError::RepositoryError(msg),
                other => CreateProfileError::RepositoryError(other.to_string()),
            })?;

        info!(profile_id = %profile.id, user_id = %user_id, "Profile created");
        Ok(profile)
    }
}
