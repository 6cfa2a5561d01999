use async_trait::async_trait;
use tracing::{error, info};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{DeleteUserError, DeleteUserUseCase};
use crate::auth::application::ports::outgoing::{
    DeletedUserSummary, UserRepository, UserRepositoryError,
};

pub struct DeleteUserService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<DeletedUserSummary, DeleteUserError> {
        match self.user_repository.delete_user(user_id).await {
            Ok(summary) => {
                info!(
                    user_id = %user_id,
                    articles_deleted = summary.articles_deleted,
                    profile_deleted = summary.profile_deleted,
                    "User deleted"
                );
                Ok(summary)
            }
            Err(UserRepositoryError::UserNotFound) => Err(DeleteUserError::UserNotFound),
            Err(e) => {
                error!(user_id = %user_id, error = %e, "User deletion failed");
                Err(DeleteUserError::RepositoryError(e.to_string()))
            }
        }
    }
}
