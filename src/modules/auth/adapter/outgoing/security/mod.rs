pub mod argon2_hasher;
pub mod bcrypt_hasher;

use std::sync::Arc;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::config::{HasherConfig, PasswordHasherKind};

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;

/// Hashing is CPU bound; keep it off the async workers.
async fn offload<T, F>(job: F) -> Result<T, HashError>
where
    F: FnOnce() -> Result<T, HashError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|_| HashError::TaskFailed)?
}

/// Picks the configured hashing scheme.
pub fn build_password_hasher(
    config: &HasherConfig,
) -> Result<Arc<dyn PasswordHasher + Send + Sync>, HashError> {
    match config.kind {
        PasswordHasherKind::Argon2 => Ok(Arc::new(Argon2Hasher::with_params(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
        )?)),
        PasswordHasherKind::Bcrypt => Ok(Arc::new(BcryptHasher::with_cost(config.bcrypt_cost)?)),
    }
}
