use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::value_objects::Email;
use crate::auth::application::ports::incoming::use_cases::{
    AuthenticateUserError, AuthenticateUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, UserQuery, UserRepository};

pub struct AuthenticateUserService<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    user_repository: R,
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R, Q> AuthenticateUserService<R, Q>
where
    R: UserRepository,
    Q: UserQuery,
{
    pub fn new(
        user_repository: R,
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_repository,
            user_query,
            password_hasher,
        }
    }

    /// Spends one hash so a missing account costs about as much as a wrong password.
    async fn burn_hash(&self, password: &str) {
        if let Err(e) = self.password_hasher.hash_password(password).await {
            warn!(error = %e, "Timing hash failed");
        }
    }
}

#[async_trait]
impl<R, Q> AuthenticateUserUseCase for AuthenticateUserService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AuthenticateUserError> {
        let email = Email::normalize(email);

        let found = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| AuthenticateUserError::RepositoryError(e.to_string()))?;

        let user = match found {
            Some(user) if user.has_usable_password() => user,
            Some(user) => {
                warn!(user_id = %user.id, "Login attempt on account without usable password");
                self.burn_hash(password).await;
                return Err(AuthenticateUserError::InvalidCredentials);
            }
            None => {
                self.burn_hash(password).await;
                return Err(AuthenticateUserError::InvalidCredentials);
            }
        };

        let matches = self
            .password_hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| AuthenticateUserError::HashingFailed(e.to_string()))?;
        if !matches {
            warn!(user_id = %user.id, "Invalid password");
            return Err(AuthenticateUserError::InvalidCredentials);
        }

        if !user.is_active {
            warn!(user_id = %user.id, "Login attempt on inactive account");
            return Err(AuthenticateUserError::InactiveAccount);
        }

        let user = self
            .user_repository
            .record_login(user.id)
            .await
            .map_err(|e| AuthenticateUserError::RepositoryError(e.to_string()))?;

        info!(user_id = %user.id, "User authenticated");
        Ok(user)
    }
}
