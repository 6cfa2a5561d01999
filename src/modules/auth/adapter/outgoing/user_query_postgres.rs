use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column, Entity as UserEntity};

/// Read side of the users table.
#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn first(&self, select: Select<UserEntity>) -> Result<Option<User>, UserQueryError> {
        select
            .one(self.db.as_ref())
            .await
            .map(|found| found.map(|row| row.to_domain()))
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        self.first(UserEntity::find_by_id(Uuid::from(user_id))).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.first(UserEntity::find().filter(Column::Email.eq(email)))
            .await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        self.first(UserEntity::find().filter(Column::Username.eq(username)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn sample_model(email: &str, username: &str) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: username.to_string(),
            phone_number: None,
            password_hash: "hash".to_string(),
            is_active: true,
            is_staff: true,
            is_superuser: true,
            last_login: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_email_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model("ana@example.com", "ana")]])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        let user = query.find_by_email("ana@example.com").await.unwrap().unwrap();

        assert_eq!(user.username, "ana");
        assert!(user.is_superuser);
        assert!(user.last_login.is_some());
    }

    #[tokio::test]
    async fn test_find_by_username_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        let user = query.find_by_username("ghost").await.unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("boom".to_string())])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        let err = query.find_by_id(UserId::new()).await.unwrap_err();

        assert!(matches!(err, UserQueryError::DatabaseError(msg) if msg.contains("boom")));
    }
}
