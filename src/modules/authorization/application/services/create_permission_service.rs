use async_trait::async_trait;
use tracing::{info, warn};

use crate::authorization::application::domain::entities::Permission;
use crate::authorization::application::ports::incoming::use_cases::{
    CreatePermissionCommand, CreatePermissionError, CreatePermissionUseCase,
};
use crate::authorization::application::ports::outgoing::{
    CreatePermissionData, PermissionRepository, PermissionRepositoryError,
};

pub struct CreatePermissionService<R>
where
    R: PermissionRepository,
{
    permission_repository: R,
}

impl<R> CreatePermissionService<R>
where
    R: PermissionRepository,
{
    pub fn new(permission_repository: R) -> Self {
        Self {
            permission_repository,
        }
    }
}

#[async_trait]
impl<R> CreatePermissionUseCase for CreatePermissionService<R>
where
    R: PermissionRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreatePermissionCommand,
    ) -> Result<Permission, CreatePermissionError> {
        let (codename, name) = command.into_parts();

        match self
            .permission_repository
            .create_permission(CreatePermissionData { codename, name })
            .await
        {
            Ok(permission) => {
                info!(codename = %permission.codename, "Permission created");
                Ok(permission)
            }
            Err(PermissionRepositoryError::PermissionAlreadyExists) => {
                warn!("Permission codename already taken");
                Err(CreatePermissionError::PermissionAlreadyExists)
            }
            Err(PermissionRepositoryError::DatabaseError(msg)) => {
                Err(CreatePermissionError::RepositoryError(msg))
            }
        }
    }
}
