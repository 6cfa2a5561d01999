use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, QueryResult,
    QuerySelect, Statement,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::authorization::application::domain::entities::Group;
use crate::authorization::application::ports::outgoing::{
    AuthorizationQuery, AuthorizationQueryError,
};

use super::sea_orm_entity::{auth_groups, auth_permissions};

#[derive(Clone, Debug)]
pub struct AuthorizationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AuthorizationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> AuthorizationQueryError {
        AuthorizationQueryError::DatabaseError(e.to_string())
    }

    fn codenames_from(rows: Vec<QueryResult>) -> Result<BTreeSet<String>, AuthorizationQueryError> {
        rows.into_iter()
            .map(|row| row.try_get::<String>("", "codename").map_err(Self::map_db_err))
            .collect()
    }
}

#[async_trait]
impl AuthorizationQuery for AuthorizationQueryPostgres {
    async fn granted_codenames(
        &self,
        user_id: UserId,
    ) -> Result<BTreeSet<String>, AuthorizationQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT p.codename
            FROM auth_permissions p
            JOIN user_permissions up ON up.permission_id = p.id
            WHERE up.user_id = $1
            UNION
            SELECT p.codename
            FROM auth_permissions p
            JOIN group_permissions gp ON gp.permission_id = p.id
            JOIN user_groups ug ON ug.group_id = gp.group_id
            WHERE ug.user_id = $1
            "#,
            vec![Uuid::from(user_id).into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(Self::map_db_err)?;
        Self::codenames_from(rows)
    }

    async fn all_codenames(&self) -> Result<BTreeSet<String>, AuthorizationQueryError> {
        let codenames: Vec<String> = auth_permissions::Entity::find()
            .select_only()
            .column(auth_permissions::Column::Codename)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(codenames.into_iter().collect())
    }

    async fn user_groups(&self, user_id: UserId) -> Result<Vec<Group>, AuthorizationQueryError> {
        let models = auth_groups::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                SELECT g.id, g.name
                FROM auth_groups g
                JOIN user_groups ug ON ug.group_id = g.id
                WHERE ug.user_id = $1
                ORDER BY g.name
                "#,
                vec![Uuid::from(user_id).into()],
            ))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }
}
