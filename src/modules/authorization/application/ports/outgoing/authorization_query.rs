use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::auth::application::domain::entities::UserId;
use crate::authorization::application::domain::entities::Group;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthorizationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AuthorizationQuery: Send + Sync {
    /// Codenames granted directly or through any of the user's groups.
    async fn granted_codenames(
        &self,
        user_id: UserId,
    ) -> Result<BTreeSet<String>, AuthorizationQueryError>;

    /// Every codename known to the system.
    async fn all_codenames(&self) -> Result<BTreeSet<String>, AuthorizationQueryError>;

    async fn user_groups(&self, user_id: UserId) -> Result<Vec<Group>, AuthorizationQueryError>;
}
