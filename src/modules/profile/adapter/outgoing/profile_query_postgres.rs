use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::article::adapter::outgoing::sea_orm_entity::articles;
use crate::article::application::domain::entities::Article;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

use super::sea_orm_entity::{profile_saved_articles, profiles};

#[derive(Clone, Debug)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ProfileQueryError {
        error!(error = %e, "Profile lookup failed");
        ProfileQueryError::DatabaseError(e.to_string())
    }

    fn corrupt(kind: &str, id: Uuid, reason: impl std::fmt::Display) -> ProfileQueryError {
        error!(id = %id, error = %reason, "Stored {} failed validation", kind);
        ProfileQueryError::DatabaseError(format!("stored {} is invalid: {}", kind, reason))
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Profile>, ProfileQueryError> {
        let model = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(Uuid::from(user_id)))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        match model {
            Some(model) => {
                let id = model.id;
                model
                    .to_domain()
                    .map(Some)
                    .map_err(|e| Self::corrupt("profile", id, e))
            }
            None => Ok(None),
        }
    }

    async fn saved_articles(&self, profile_id: Uuid) -> Result<Vec<Article>, ProfileQueryError> {
        let models = articles::Entity::find()
            .join_rev(
                JoinType::InnerJoin,
                profile_saved_articles::Relation::Article.def(),
            )
            .filter(profile_saved_articles::Column::ProfileId.eq(profile_id))
            .order_by_desc(profile_saved_articles::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        models
            .into_iter()
            .map(|model| {
                let id = model.id;
                model.to_domain().map_err(|e| Self::corrupt("article", id, e))
            })
            .collect()
    }
}
