use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::authorization::application::domain::entities::Permission;
use crate::authorization::application::ports::outgoing::{
    CreatePermissionData, PermissionRepository, PermissionRepositoryError,
};
use crate::shared::db_error::{classify, DbFailure};

use super::sea_orm_entity::auth_permissions::ActiveModel as PermissionActiveModel;

#[derive(Clone, Debug)]
pub struct PermissionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PermissionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PermissionRepository for PermissionRepositoryPostgres {
    async fn create_permission(
        &self,
        data: CreatePermissionData,
    ) -> Result<Permission, PermissionRepositoryError> {
        let active = PermissionActiveModel {
            id: Set(Uuid::new_v4()),
            codename: Set(data.codename),
            name: Set(data.name),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| match classify(&e) {
            DbFailure::UniqueViolation(_) => PermissionRepositoryError::PermissionAlreadyExists,
            _ => {
                error!(error = %e, "Failed to insert permission");
                PermissionRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_domain())
    }
}
