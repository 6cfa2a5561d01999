use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<Profile, UpdateProfileError> {
        let data = command.validate()?;

        let profile = self
            .profile_repository
            .patch_profile(user_id, data)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::ProfileNotFound => UpdateProfileError::ProfileNotFound,
                ProfileRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        info!(profile_id = %profile.id, user_id = %user_id, "Profile updated");
        Ok(profile)
    }
}
