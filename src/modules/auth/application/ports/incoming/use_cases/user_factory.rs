use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::shared::domain::ValidationError;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw input for the user factory. Validation happens in the service so the
/// documented check order is kept in one place.
#[derive(Debug, Clone, Default)]
pub struct CreateUserCommand {
    pub email: String,
    pub username: String,
    pub password: Option<String>,
    pub phone_number: Option<String>,
}

impl CreateUserCommand {
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password: None,
            phone_number: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A user with this email already exists")]
    EmailAlreadyExists,

    #[error("A user with this username already exists")]
    UsernameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserFactoryUseCase: Send + Sync {
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;

    /// Same as `create_user` but the stored user is staff and superuser.
    /// A password is mandatory here.
    async fn create_superuser(&self, command: CreateUserCommand)
        -> Result<User, CreateUserError>;
}
