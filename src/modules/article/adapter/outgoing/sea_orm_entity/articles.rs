use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::article::application::domain::entities::Article;
use crate::article::application::domain::value_objects::{ArticleRatings, Rating};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::{ImageRef, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_id: Uuid,
    pub image_ref: Option<String>,
    pub cleanliness_rating: i16,
    pub affordability_rating: i16,
    pub service_rating: i16,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::AuthorId",
        to = "users::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
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
    /// Fails only if a stored row violates the column constraints.
    pub fn to_domain(self) -> Result<Article, ValidationError> {
        Ok(Article {
            id: self.id,
            author_id: UserId::from(self.author_id),
            title: self.title,
            content: self.content,
            image: self.image_ref.map(ImageRef::parse).transpose()?,
            ratings: ArticleRatings {
                cleanliness: Rating::new("cleanliness_rating", self.cleanliness_rating.into())?,
                affordability: Rating::new(
                    "affordability_rating",
                    self.affordability_rating.into(),
                )?,
                service: Rating::new("service_rating", self.service_rating.into())?,
            },
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}
