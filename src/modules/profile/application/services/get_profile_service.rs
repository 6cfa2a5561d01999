use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{GetProfileError, GetProfileUseCase};
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

impl From<ProfileQueryError> for GetProfileError {
    fn from(e: ProfileQueryError) -> Self {
        match e {
            ProfileQueryError::DatabaseError(msg) => GetProfileError::RepositoryError(msg),
        }
    }
}

pub struct GetProfileService<Q>
where
    Q: ProfileQuery,
{
    profile_query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Profile, GetProfileError> {
        self.profile_query
            .find_by_user(user_id)
            .await?
            .ok_or(GetProfileError::ProfileNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::application::domain::entities::Article;
    use chrono::Utc;
    use uuid::Uuid;

    struct MockProfileQuery {
        profile: Option<Profile>,
        fail: bool,
    }

    #[async_trait]
    impl ProfileQuery for MockProfileQuery {
        async fn find_by_user(&self, _user_id: UserId) -> Result<Option<Profile>, ProfileQueryError> {
            if self.fail {
                return Err(ProfileQueryError::DatabaseError("timeout".to_string()));
            }
            Ok(self.profile.clone())
        }

        async fn saved_articles(&self, _profile_id: Uuid) -> Result<Vec<Article>, ProfileQueryError> {
            unimplemented!("not needed for get profile tests")
        }
    }

    fn profile(user_id: UserId) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            user_id,
            profile_picture: None,
            bio: "Slow traveller".to_string(),
            gender: None,
            points: 12,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_execute_found() {
        let user_id = UserId::new();
        let svc = GetProfileService::new(MockProfileQuery {
            profile: Some(profile(user_id)),
            fail: false,
        });

        let found = svc.execute(user_id).await.unwrap();

        assert_eq!(found.user_id, user_id);
        assert_eq!(found.points, 12);
    }

    #[tokio::test]
    async fn test_execute_missing_profile() {
        let svc = GetProfileService::new(MockProfileQuery {
            profile: None,
            fail: false,
        });

        let err = svc.execute(UserId::new()).await.unwrap_err();

        assert!(matches!(err, GetProfileError::ProfileNotFound));
    }

    #[tokio::test]
    async fn test_execute_query_failure() {
        let svc = GetProfileService::new(MockProfileQuery {
            profile: None,
            fail: true,
        });

        let err = svc.execute(UserId::new()).await.unwrap_err();

        assert!(matches!(err, GetProfileError::RepositoryError(msg) if msg == "timeout"));
    }
}
