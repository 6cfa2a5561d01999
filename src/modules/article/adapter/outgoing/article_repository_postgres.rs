use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseBackend,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::article::application::domain::value_objects::Rating;
use crate::article::application::ports::outgoing::{
    ArticleRepository, ArticleRepositoryError, CreateArticleData, PatchArticleData,
};
use crate::auth::application::domain::entities::UserId;
use crate::shared::db_error::{classify, DbFailure};
use crate::shared::domain::{PatchField, ValidationError};

use super::sea_orm_entity::articles::{self, ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ArticleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ArticleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticleRepository for ArticleRepositoryPostgres {
    async fn create_article(
        &self,
        data: CreateArticleData,
    ) -> Result<Article, ArticleRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            content: Set(data.content),
            author_id: Set(data.author_id.into()),
            image_ref: Set(data.image.map(|i| i.into_inner())),
            cleanliness_rating: Set(data.ratings.cleanliness.value().into()),
            affordability_rating: Set(data.ratings.affordability.value().into()),
            service_rating: Set(data.ratings.service.value().into()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| match classify(&e) {
            DbFailure::ForeignKeyViolation(_) => ArticleRepositoryError::AuthorNotFound,
            _ => map_db_err(e),
        })?;

        model_to_article(inserted)
    }

    async fn patch_article(
        &self,
        author: UserId,
        article_id: Uuid,
        data: PatchArticleData,
    ) -> Result<Article, ArticleRepositoryError> {
        let author_uuid: Uuid = author.into();

        if data.is_empty() {
            let current = Entity::find_by_id(article_id)
                .filter(Column::AuthorId.eq(author_uuid))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ArticleRepositoryError::NotFound)?;

            return model_to_article(current);
        }

        let mut model = ActiveModel {
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(content) = data.content {
            model.content = Set(content);
        }
        if let Some(image) = data.image.into_change() {
            model.image_ref = Set(image.map(|i| i.into_inner()));
        }
        model.cleanliness_rating = rating_change(data.cleanliness_rating);
        model.affordability_rating = rating_change(data.affordability_rating);
        model.service_rating = rating_change(data.service_rating);

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(article_id))
            .filter(Column::AuthorId.eq(author_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ArticleRepositoryError::NotFound)?;

        model_to_article(updated)
    }

    async fn delete_article(
        &self,
        author: UserId,
        article_id: Uuid,
    ) -> Result<(), ArticleRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match delete_with_links(&txn, author.into(), article_id).await {
            Ok(()) => txn.commit().await.map_err(map_db_err),
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!(error = %rollback_err, "Rollback failed after article delete error");
                }
                Err(e)
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn delete_with_links<C>(
    conn: &C,
    author_id: Uuid,
    article_id: Uuid,
) -> Result<(), ArticleRepositoryError>
where
    C: ConnectionTrait,
{
    Entity::find_by_id(article_id)
        .filter(Column::AuthorId.eq(author_id))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or(ArticleRepositoryError::NotFound)?;

    let unlink = Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "DELETE FROM profile_saved_articles WHERE article_id = $1",
        vec![article_id.into()],
    );
    conn.execute(unlink).await.map_err(map_db_err)?;

    let deleted = Entity::delete_many()
        .filter(Column::Id.eq(article_id))
        .filter(Column::AuthorId.eq(author_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;
    if deleted.rows_affected == 0 {
        return Err(ArticleRepositoryError::NotFound);
    }

    Ok(())
}

fn rating_change(value: PatchField<Rating>) -> ActiveValue<i16> {
    match value {
        PatchField::Value(rating) => Set(rating.value().into()),
        _ => NotSet,
    }
}

fn map_db_err(e: DbErr) -> ArticleRepositoryError {
    error!(error = %e, "Article query failed");
    ArticleRepositoryError::DatabaseError(e.to_string())
}

fn map_corrupt_row(e: ValidationError) -> ArticleRepositoryError {
    ArticleRepositoryError::DatabaseError(format!("stored article is invalid: {}", e))
}

fn model_to_article(model: articles::Model) -> Result<Article, ArticleRepositoryError> {
    model.to_domain().map_err(map_corrupt_row)
}
