use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::authorization::application::domain::entities::Group;
use crate::authorization::application::ports::incoming::use_cases::{
    CheckPermissionError, CheckPermissionUseCase,
};
use crate::authorization::application::ports::outgoing::AuthorizationQuery;

pub struct CheckPermissionService<Q, A>
where
    Q: UserQuery,
    A: AuthorizationQuery,
{
    user_query: Q,
    authorization_query: A,
}

impl<Q, A> CheckPermissionService<Q, A>
where
    Q: UserQuery,
    A: AuthorizationQuery,
{
    pub fn new(user_query: Q, authorization_query: A) -> Self {
        Self {
            user_query,
            authorization_query,
        }
    }

    async fn load_user(&self, user_id: UserId) -> Result<User, CheckPermissionError> {
        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| CheckPermissionError::RepositoryError(e.to_string()))?
            .ok_or(CheckPermissionError::UserNotFound)
    }
}

#[async_trait]
impl<Q, A> CheckPermissionUseCase for CheckPermissionService<Q, A>
where
    Q: UserQuery + Send + Sync,
    A: AuthorizationQuery + Send + Sync,
{
    async fn all_permissions(
        &self,
        user_id: UserId,
    ) -> Result<BTreeSet<String>, CheckPermissionError> {
        let user = self.load_user(user_id).await?;
        if !user.is_active {
            return Ok(BTreeSet::new());
        }

        let codenames = if user.is_superuser {
            self.authorization_query.all_codenames().await
        } else {
            self.authorization_query.granted_codenames(user_id).await
        };

        codenames.map_err(|e| CheckPermissionError::RepositoryError(e.to_string()))
    }

    async fn has_permission(
        &self,
        user_id: UserId,
        codename: &str,
    ) -> Result<bool, CheckPermissionError> {
        let user = self.load_user(user_id).await?;
        if !user.is_active {
            return Ok(false);
        }
        if user.is_superuser {
            return Ok(true);
        }

        let granted = self
            .authorization_query
            .granted_codenames(user_id)
            .await
            .map_err(|e| CheckPermissionError::RepositoryError(e.to_string()))?;

        Ok(granted.contains(codename))
    }

    async fn user_groups(&self, user_id: UserId) -> Result<Vec<Group>, CheckPermissionError> {
        self.load_user(user_id).await?;

        self.authorization_query
            .user_groups(user_id)
            .await
            .map_err(|e| CheckPermissionError::RepositoryError(e.to_string()))
    }
}
