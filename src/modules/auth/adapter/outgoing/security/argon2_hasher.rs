use argon2::{
    password_hash::{Error as PhcError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use super::offload;
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_LANES: u32 = 1;

/// Argon2id hasher producing PHC strings.
#[derive(Clone)]
pub struct Argon2Hasher {
    engine: Argon2<'static>,
    #[cfg(test)]
    fixed_salt: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        Params::new(memory_kib, iterations, parallelism, None)
            .map(Self::from_params)
            .map_err(|e| HashError::InvalidParams(e.to_string()))
    }

    fn from_params(params: Params) -> Self {
        Self {
            engine: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            #[cfg(test)]
            fixed_salt: None,
        }
    }

    #[cfg(not(test))]
    fn salt(&self) -> SaltString {
        SaltString::generate(&mut OsRng)
    }

    #[cfg(test)]
    fn salt(&self) -> SaltString {
        self.fixed_salt
            .clone()
            .unwrap_or_else(|| SaltString::generate(&mut OsRng))
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        let params = Params::new(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_LANES, None)
            .unwrap_or_default();
        Self::from_params(params)
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let engine = self.engine.clone();
        let salt = self.salt();
        let secret = password.as_bytes().to_vec();

        offload(move || {
            engine
                .hash_password(&secret, &salt)
                .map(|phc| phc.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let engine = self.engine.clone();
        let secret = password.as_bytes().to_vec();
        let stored = hash.to_owned();

        // Cost parameters are read back from the PHC string, so older hashes still verify.
        offload(move || {
            let phc = PasswordHash::new(&stored).map_err(|_| HashError::VerifyFailed)?;
            match engine.verify_password(&secret, &phc) {
                Ok(()) => Ok(true),
                Err(PhcError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
    }
}
