use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    AdjustPointsError, AdjustPointsUseCase,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

pub struct AdjustPointsService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> AdjustPointsService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> AdjustPointsUseCase for AdjustPointsService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, delta: i32) -> Result<Profile, AdjustPointsError> {
        let profile = self
            .profile_repository
            .adjust_points(user_id, delta)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::ProfileNotFound => AdjustPointsError::ProfileNotFound,
                ProfileRepositoryError::DatabaseError(msg) => AdjustPointsError::RepositoryError(msg),
                other => AdjustPointsError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, delta, points = profile.points, "Profile points adjusted");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::application::ports::outgoing::{CreateProfileData, PatchProfileData};
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
    use uuid::Uuid;

    mock! {
        pub ProfileRepo {}
        #[async_trait]
        impl ProfileRepository for ProfileRepo {
            async fn create_profile(&self, data: CreateProfileData) -> Result<Profile, ProfileRepositoryError>;
            async fn patch_profile(&self, user_id: UserId, data: PatchProfileData) -> Result<Profile, ProfileRepositoryError>;
            async fn adjust_points(&self, user_id: UserId, delta: i32) -> Result<Profile, ProfileRepositoryError>;
            async fn save_article(&self, user_id: UserId, article_id: Uuid) -> Result<(), ProfileRepositoryError>;
            async fn unsave_article(&self, user_id: UserId, article_id: Uuid) -> Result<(), ProfileRepositoryError>;
        }
    }

    fn profile(user_id: UserId, points: i32) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            user_id,
            profile_picture: None,
            bio: String::new(),
            gender: None,
            points,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_execute_forwards_signed_delta() {
        let user_id = UserId::new();
        let mut repo = MockProfileRepo::new();
        repo.expect_adjust_points()
            .with(eq(user_id), eq(-15))
            .times(1)
            .returning(|user_id, _| Ok(profile(user_id, -5)));
        let svc = AdjustPointsService::new(repo);

        let updated = svc.execute(user_id, -15).await.unwrap();

        assert_eq!(updated.points, -5);
    }

    #[tokio::test]
    async fn test_execute_missing_profile() {
        let mut repo = MockProfileRepo::new();
        repo.expect_adjust_points()
            .returning(|_, _| Err(ProfileRepositoryError::ProfileNotFound));
        let svc = AdjustPointsService::new(repo);

        let err = svc.execute(UserId::new(), 10).await.unwrap_err();

        assert!(matches!(err, AdjustPointsError::ProfileNotFound));
    }
}
