use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::authorization::application::domain::entities::Group;
use crate::authorization::application::ports::outgoing::{GroupRepository, GroupRepositoryError};
use crate::shared::db_error::{classify, DbFailure};

use super::sea_orm_entity::auth_groups::ActiveModel as GroupActiveModel;

#[derive(Clone, Debug)]
pub struct GroupRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupRepository for GroupRepositoryPostgres {
    async fn create_group(&self, name: String) -> Result<Group, GroupRepositoryError> {
        let active = GroupActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| match classify(&e) {
            DbFailure::UniqueViolation(_) => GroupRepositoryError::GroupAlreadyExists,
            _ => {
                error!(error = %e, "Failed to insert group");
                GroupRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_domain())
    }
}
