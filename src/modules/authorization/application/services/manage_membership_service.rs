use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::authorization::application::ports::incoming::use_cases::{
    ManageMembershipError, ManageMembershipUseCase,
};
use crate::authorization::application::ports::outgoing::{
    MembershipRepository, MembershipRepositoryError,
};

impl From<MembershipRepositoryError> for ManageMembershipError {
    fn from(e: MembershipRepositoryError) -> Self {
        match e {
            MembershipRepositoryError::UserNotFound => ManageMembershipError::UserNotFound,
            MembershipRepositoryError::GroupNotFound => ManageMembershipError::GroupNotFound,
            MembershipRepositoryError::PermissionNotFound => {
                ManageMembershipError::PermissionNotFound
            }
            MembershipRepositoryError::DatabaseError(msg) => {
                ManageMembershipError::RepositoryError(msg)
            }
        }
    }
}

pub struct ManageMembershipService<R>
where
    R: MembershipRepository,
{
    membership_repository: R,
}

impl<R> ManageMembershipService<R>
where
    R: MembershipRepository,
{
    pub fn new(membership_repository: R) -> Self {
        Self {
            membership_repository,
        }
    }
}

#[async_trait]
impl<R> ManageMembershipUseCase for ManageMembershipService<R>
where
    R: MembershipRepository + Send + Sync,
{
    async fn add_user_to_group(
        &self,
        user_id: UserId,
        group_id: Uuid,
    ) -> Result<(), ManageMembershipError> {
        self.membership_repository
            .add_user_to_group(user_id, group_id)
            .await?;
        info!(user_id = %user_id, group_id = %group_id, "User added to group");
        Ok(())
    }

    async fn remove_user_from_group(
        &self,
        user_id: UserId,
        group_id: Uuid,
    ) -> Result<(), ManageMembershipError> {
        self.membership_repository
            .remove_user_from_group(user_id, group_id)
            .await?;
        info!(user_id = %user_id, group_id = %group_id, "User removed from group");
        Ok(())
    }

    async fn grant_user_permission(
        &self,
        user_id: UserId,
        permission_id: Uuid,
    ) -> Result<(), ManageMembershipError> {
        self.membership_repository
            .grant_user_permission(user_id, permission_id)
            .await?;
        info!(user_id = %user_id, permission_id = %permission_id, "Permission granted to user");
        Ok(())
    }

    async fn revoke_user_permission(
        &self,
        user_id: UserId,
        permission_id: Uuid,
    ) -> Result<(), ManageMembershipError> {
        self.membership_repository
            .revoke_user_permission(user_id, permission_id)
            .await?;
        info!(user_id = %user_id, permission_id = %permission_id, "Permission revoked from user");
        Ok(())
    }

    async fn grant_group_permission(
        &self,
        group_id: Uuid,
        permission_id: Uuid,
    ) -> Result<(), ManageMembershipError> {
        self.membership_repository
            .grant_group_permission(group_id, permission_id)
            .await?;
        info!(group_id = %group_id, permission_id = %permission_id, "Permission granted to group");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Membership {}
        #[async_trait]
        impl MembershipRepository for Membership {
            async fn add_user_to_group(&self, user_id: UserId, group_id: Uuid) -> Result<(), MembershipRepositoryError>;
            async fn remove_user_from_group(&self, user_id: UserId, group_id: Uuid) -> Result<(), MembershipRepositoryError>;
            async fn grant_user_permission(&self, user_id: UserId, permission_id: Uuid) -> Result<(), MembershipRepositoryError>;
            async fn revoke_user_permission(&self, user_id: UserId, permission_id: Uuid) -> Result<(), MembershipRepositoryError>;
            async fn grant_group_permission(&self, group_id: Uuid, permission_id: Uuid) -> Result<(), MembershipRepositoryError>;
        }
    }

    #[tokio::test]
    async fn test_add_user_to_group_passes_ids_through() {
        let user_id = UserId::new();
        let group_id = Uuid::new_v4();
        let mut repo = MockMembership::new();
        repo.expect_add_user_to_group()
            .with(eq(user_id), eq(group_id))
            .times(1)
            .returning(|_, _| Ok(()));
        let svc = ManageMembershipService::new(repo);

        let res = svc.add_user_to_group(user_id, group_id).await;

        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_group_is_reported() {
        let mut repo = MockMembership::new();
        repo.expect_add_user_to_group()
            .returning(|_, _| Err(MembershipRepositoryError::GroupNotFound));
        let svc = ManageMembershipService::new(repo);

        let err = svc
            .add_user_to_group(UserId::new(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, ManageMembershipError::GroupNotFound));
    }

    #[tokio::test]
    async fn test_grant_user_permission_unknown_permission() {
        let mut repo = MockMembership::new();
        repo.expect_grant_user_permission()
            .returning(|_, _| Err(MembershipRepositoryError::PermissionNotFound));
        let svc = ManageMembershipService::new(repo);

        let err = svc
            .grant_user_permission(UserId::new(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, ManageMembershipError::PermissionNotFound));
    }

    #[tokio::test]
    async fn test_grant_group_permission_maps_database_error() {
        let mut repo = MockMembership::new();
        repo.expect_grant_group_permission()
            .returning(|_, _| Err(MembershipRepositoryError::DatabaseError("down".to_string())));
        let svc = ManageMembershipService::new(repo);

        let err = svc
            .grant_group_permission(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, ManageMembershipError::RepositoryError(msg) if msg == "down"));
    }

    #[tokio::test]
    async fn test_removals_succeed() {
        let mut repo = MockMembership::new();
        repo.expect_remove_user_from_group()
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_revoke_user_permission()
            .times(1)
            .returning(|_, _| Ok(()));
        let svc = ManageMembershipService::new(repo);

        assert!(svc
            .remove_user_from_group(UserId::new(), Uuid::new_v4())
            .await
            .is_ok());
        assert!(svc
            .revoke_user_permission(UserId::new(), Uuid::new_v4())
            .await
            .is_ok());
    }
}
