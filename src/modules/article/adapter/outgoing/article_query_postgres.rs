use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Statement,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::article::application::ports::outgoing::{ArticleQuery, ArticleQueryError};
use crate::auth::application::domain::entities::UserId;

use super::sea_orm_entity::articles::{self, Column, Entity};

#[derive(Clone, Debug)]
pub struct ArticleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ArticleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ArticleQueryError {
        error!(error = %e, "Article lookup failed");
        ArticleQueryError::DatabaseError(e.to_string())
    }

    fn to_domain(model: articles::Model) -> Result<Article, ArticleQueryError> {
        let id = model.id;
        model.to_domain().map_err(|e| {
            error!(article_id = %id, error = %e, "Stored article failed validation");
            ArticleQueryError::DatabaseError(format!("stored article is invalid: {}", e))
        })
    }
}

#[async_trait]
impl ArticleQuery for ArticleQueryPostgres {
    async fn find_by_id(&self, article_id: Uuid) -> Result<Option<Article>, ArticleQueryError> {
        Entity::find_by_id(article_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(Self::to_domain)
            .transpose()
    }

    async fn list_by_author(&self, author: UserId) -> Result<Vec<Article>, ArticleQueryError> {
        Entity::find()
            .filter(Column::AuthorId.eq(Uuid::from(author)))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(Self::to_domain)
            .collect()
    }

    async fn count_saved_by(&self, article_id: Uuid) -> Result<u64, ArticleQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT COUNT(*) AS num_items
            FROM profile_saved_articles
            WHERE article_id = $1
            "#,
            vec![article_id.into()],
        );

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(Self::map_db_err)?;

        let count: i64 = match row {
            Some(row) => row
                .try_get("", "num_items")
                .map_err(Self::map_db_err)?,
            None => 0,
        };

        Ok(count.max(0) as u64)
    }
}
