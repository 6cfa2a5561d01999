use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash password")]
    HashFailed,

    /// The stored value is not a hash this scheme understands.
    #[error("Stored password hash is unreadable")]
    VerifyFailed,

    #[error("Hashing task was cancelled")]
    TaskFailed,

    #[error("Invalid hasher parameters: {0}")]
    InvalidParams(String),
}

/// One-way password storage. `verify_password` returns `Ok(false)` for a
/// wrong password and an error only when `hash` cannot be read.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
