use async_trait::async_trait;

use super::offload;
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Work factors accepted by the bcrypt crate.
const COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Alternative scheme for deployments migrating from bcrypt hashes.
#[derive(Clone, Debug)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn with_cost(cost: u32) -> Result<Self, HashError> {
        if COST_RANGE.contains(&cost) {
            Ok(Self { cost })
        } else {
            Err(HashError::InvalidParams(format!(
                "bcrypt cost {} outside {}..={}",
                cost,
                COST_RANGE.start(),
                COST_RANGE.end()
            )))
        }
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let (secret, cost) = (password.to_owned(), self.cost);
        offload(move || bcrypt::hash(secret, cost).map_err(|_| HashError::HashFailed)).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let (secret, stored) = (password.to_owned(), hash.to_owned());
        offload(move || bcrypt::verify(secret, &stored).map_err(|_| HashError::VerifyFailed)).await
    }
}
