use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::authorization::application::ports::outgoing::{
    MembershipRepository, MembershipRepositoryError,
};
use crate::shared::db_error::{classify, DbFailure};

use super::sea_orm_entity::{group_permissions, user_groups, user_permissions};

#[derive(Clone, Debug)]
pub struct MembershipRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MembershipRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolves a foreign key violation to the missing side of the link.
    fn map_link_err(
        e: DbErr,
        constraints: [(&str, MembershipRepositoryError); 2],
    ) -> MembershipRepositoryError {
        let failure = classify(&e);
        if let DbFailure::ForeignKeyViolation(_) = failure {
            for (constraint, err) in constraints {
                if failure.mentions(constraint) {
                    return err;
                }
            }
        }
        MembershipRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl MembershipRepository for MembershipRepositoryPostgres {
    async fn add_user_to_group(
        &self,
        user_id: UserId,
        group_id: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        user_groups::Entity::insert(user_groups::ActiveModel {
            user_id: Set(user_id.into()),
            group_id: Set(group_id),
        })
        .on_conflict(
            OnConflict::columns([user_groups::Column::UserId, user_groups::Column::GroupId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&*self.db)
        .await
        .map_err(|e| {
            Self::map_link_err(
                e,
                [
                    ("fk_user_groups_user_id", MembershipRepositoryError::UserNotFound),
                    ("fk_user_groups_group_id", MembershipRepositoryError::GroupNotFound),
                ],
            )
        })?;

        Ok(())
    }

    async fn remove_user_from_group(
        &self,
        user_id: UserId,
        group_id: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        user_groups::Entity::delete_many()
            .filter(user_groups::Column::UserId.eq(Uuid::from(user_id)))
            .filter(user_groups::Column::GroupId.eq(group_id))
            .exec(&*self.db)
            .await
            .map_err(|e| MembershipRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn grant_user_permission(
        &self,
        user_id: UserId,
        permission_id: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        user_permissions::Entity::insert(user_permissions::ActiveModel {
            user_id: Set(user_id.into()),
            permission_id: Set(permission_id),
        })
        .on_conflict(
            OnConflict::columns([
                user_permissions::Column::UserId,
                user_permissions::Column::PermissionId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&*self.db)
        .await
        .map_err(|e| {
            Self::map_link_err(
                e,
                [
                    ("fk_user_permissions_user_id", MembershipRepositoryError::UserNotFound),
                    (
                        "fk_user_permissions_permission_id",
                        MembershipRepositoryError::PermissionNotFound,
                    ),
                ],
            )
        })?;

        Ok(())
    }

    async fn revoke_user_permission(
        &self,
        user_id: UserId,
        permission_id: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        user_permissions::Entity::delete_many()
            .filter(user_permissions::Column::UserId.eq(Uuid::from(user_id)))
            .filter(user_permissions::Column::PermissionId.eq(permission_id))
            .exec(&*self.db)
            .await
            .map_err(|e| MembershipRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn grant_group_permission(
        &self,
        group_id: Uuid,
        permission_id: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        group_permissions::Entity::insert(group_permissions::ActiveModel {
            group_id: Set(group_id),
            permission_id: Set(permission_id),
        })
        .on_conflict(
            OnConflict::columns([
                group_permissions::Column::GroupId,
                group_permissions::Column::PermissionId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&*self.db)
        .await
        .map_err(|e| {
            Self::map_link_err(
                e,
                [
                    ("fk_group_permissions_group_id", MembershipRepositoryError::GroupNotFound),
                    (
                        "fk_group_permissions_permission_id",
                        MembershipRepositoryError::PermissionNotFound,
                    ),
                ],
            )
        })?;

        Ok(())
    }
}
