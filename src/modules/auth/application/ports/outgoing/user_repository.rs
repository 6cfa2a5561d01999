use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};

/// Validated, hashed input for a single user insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserData {
    pub email: String,
    pub username: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// What went away together with a deleted user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeletedUserSummary {
    pub articles_deleted: u64,
    pub profile_deleted: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("A user with this email already exists")]
    EmailAlreadyExists,

    #[error("A user with this username already exists")]
    UsernameAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Stamps `last_login` with the current time.
    async fn record_login(&self, user_id: UserId) -> Result<User, UserRepositoryError>;

    /// Removes the user and everything owned by it in one transaction.
    async fn delete_user(&self, user_id: UserId)
        -> Result<DeletedUserSummary, UserRepositoryError>;
}
