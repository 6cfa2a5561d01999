use async_trait::async_trait;

use crate::authorization::application::domain::entities::Permission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePermissionData {
    pub codename: String,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PermissionRepositoryError {
    #[error("A permission with this codename already exists")]
    PermissionAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PermissionRepository: Send + Sync {
    async fn create_permission(
        &self,
        data: CreatePermissionData,
    ) -> Result<Permission, PermissionRepositoryError>;
}
