use async_trait::async_trait;

use crate::authorization::application::domain::entities::Permission;
use crate::authorization::application::domain::value_objects::{Codename, PermissionName};
use crate::shared::domain::ValidationError;

#[derive(Debug, Clone)]
pub struct CreatePermissionCommand {
    codename: Codename,
    name: PermissionName,
}

impl CreatePermissionCommand {
    pub fn new(codename: &str, name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            codename: Codename::parse(codename)?,
            name: PermissionName::parse(name)?,
        })
    }

    pub fn codename(&self) -> &str {
        self.codename.as_str()
    }

    pub fn into_parts(self) -> (String, String) {
        (self.codename.into_inner(), self.name.into_inner())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePermissionError {
    #[error("A permission with this codename already exists")]
    PermissionAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePermissionUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreatePermissionCommand,
    ) -> Result<Permission, CreatePermissionError>;
}
