use async_trait::async_trait;
use tracing::{info, warn};

use crate::authorization::application::domain::entities::Group;
use crate::authorization::application::domain::value_objects::GroupName;
use crate::authorization::application::ports::incoming::use_cases::{
    CreateGroupError, CreateGroupUseCase,
};
use crate::authorization::application::ports::outgoing::{GroupRepository, GroupRepositoryError};

pub struct CreateGroupService<R>
where
    R: GroupRepository,
{
    group_repository: R,
}

impl<R> CreateGroupService<R>
where
    R: GroupRepository,
{
    pub fn new(group_repository: R) -> Self {
        Self { group_repository }
    }
}

#[async_trait]
impl<R> CreateGroupUseCase for CreateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, name: &str) -> Result<Group, CreateGroupError> {
        let name = GroupName::parse(name)?;

        let group = self
            .group_repository
            .create_group(name.into_inner())
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupAlreadyExists => {
                    warn!("Group name already taken");
                    CreateGroupError::GroupAlreadyExists
                }
                GroupRepositoryError::DatabaseError(msg) => CreateGroupError::RepositoryError(msg),
            })?;

        info!(group_id = %group.id, name = %group.name, "Group created");
        Ok(group)
    }
}
