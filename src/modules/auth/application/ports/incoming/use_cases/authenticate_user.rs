use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticateUserError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("This account is inactive")]
    InactiveAccount,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AuthenticateUserUseCase: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<User, AuthenticateUserError>;
}
