use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::domain::value_objects::Gender;
use crate::shared::domain::{ImageRef, ValidationError};

use super::profile_saved_articles;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub profile_picture_ref: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub gender: Option<String>,
    pub points: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::UserId",
        to = "users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "profile_saved_articles::Entity")]
    SavedArticles,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<profile_saved_articles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedArticles.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // the migrations install an updated_at trigger; stamp it here only without one
        #[cfg(feature = "no_db_triggers")]
        if !_insert {
            self.updated_at = sea_orm::ActiveValue::Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(self) -> Result<Profile, ValidationError> {
        Ok(Profile {
            id: self.id,
            user_id: UserId::from(self.user_id),
            profile_picture: self.profile_picture_ref.map(ImageRef::parse).transpose()?,
            bio: self.bio,
            gender: self.gender.as_deref().map(Gender::parse).transpose()?,
            points: self.points,
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}
