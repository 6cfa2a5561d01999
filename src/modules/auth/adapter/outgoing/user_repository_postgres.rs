use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, DeletedUserSummary, UserRepository, UserRepositoryError,
};
use crate::shared::db_error::{classify, DbFailure};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        UserRepositoryError::DatabaseError(e.to_string())
    }

    fn map_insert_err(e: DbErr) -> UserRepositoryError {
        match classify(&e) {
            DbFailure::UniqueViolation(detail) if detail.contains("username") => {
                UserRepositoryError::UsernameAlreadyExists
            }
            DbFailure::UniqueViolation(_) => UserRepositoryError::EmailAlreadyExists,
            _ => Self::map_db_err(e),
        }
    }

    // =====================================================
    // Cascade statements
    // =====================================================

    fn delete_saved_links_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM profile_saved_articles
            WHERE profile_id IN (SELECT id FROM profiles WHERE user_id = $1)
               OR article_id IN (SELECT id FROM articles WHERE author_id = $1)
            "#,
            vec![user_id.into()],
        )
    }

    fn delete_by_user_stmt(sql: &str, user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, vec![user_id.into()])
    }

    async fn cascade_delete<C>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<DeletedUserSummary, UserRepositoryError>
    where
        C: ConnectionTrait,
    {
        UserEntity::find_by_id(user_id)
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        conn.execute(Self::delete_saved_links_stmt(user_id))
            .await
            .map_err(Self::map_db_err)?;

        let profiles = conn
            .execute(Self::delete_by_user_stmt(
                "DELETE FROM profiles WHERE user_id = $1",
                user_id,
            ))
            .await
            .map_err(Self::map_db_err)?;

        let articles = conn
            .execute(Self::delete_by_user_stmt(
                "DELETE FROM articles WHERE author_id = $1",
                user_id,
            ))
            .await
            .map_err(Self::map_db_err)?;

        for sql in [
            "DELETE FROM user_groups WHERE user_id = $1",
            "DELETE FROM user_permissions WHERE user_id = $1",
        ] {
            conn.execute(Self::delete_by_user_stmt(sql, user_id))
                .await
                .map_err(Self::map_db_err)?;
        }

        let deleted = UserEntity::delete_by_id(user_id)
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;
        if deleted.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(DeletedUserSummary {
            articles_deleted: articles.rows_affected(),
            profile_deleted: profiles.rows_affected() > 0,
        })
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            username: Set(data.username),
            phone_number: Set(data.phone_number),
            password_hash: Set(data.password_hash),
            is_active: Set(true),
            is_staff: Set(data.is_staff),
            is_superuser: Set(data.is_superuser),
            last_login: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_err)?;

        Ok(inserted.to_domain())
    }

    async fn record_login(&self, user_id: UserId) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(Uuid::from(user_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.last_login = Set(Some(Utc::now().into()));

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete_user(
        &self,
        user_id: UserId,
    ) -> Result<DeletedUserSummary, UserRepositoryError> {
        let user_uuid: Uuid = user_id.into();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::cascade_delete(&txn, user_uuid).await {
            Ok(summary) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(summary)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!(error = %rollback_err, "Rollback failed after user delete error");
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn sample_model(id: Uuid) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            email: "ana@example.com".to_string(),
            username: "ana".to_string(),
            phone_number: Some("+6281234".to_string()),
            password_hash: "$argon2id$hash".to_string(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_data() -> CreateUserData {
        CreateUserData {
            email: "ana@example.com".to_string(),
            username: "ana".to_string(),
            phone_number: Some("+6281234".to_string()),
            password_hash: "$argon2id$hash".to_string(),
            is_staff: false,
            is_superuser: false,
        }
    }

    // =====================================================
    // create_user
    // =====================================================

    #[tokio::test]
    async fn test_create_user_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id)]])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let user = repo.create_user(sample_data()).await.unwrap();

        assert_eq!(user.id, UserId::from(id));
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.phone_number.as_deref(), Some("+6281234"));
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"uq_users_username\"".to_string(),
            ))])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let err = repo.create_user(sample_data()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::UsernameAlreadyExists));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"uq_users_email\"".to_string(),
            ))])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let err = repo.create_user(sample_data()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let err = repo.create_user(sample_data()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::DatabaseError(msg) if msg.contains("connection timeout")));
    }

    // =====================================================
    // record_login
    // =====================================================

    #[tokio::test]
    async fn test_record_login_sets_last_login() {
        let id = Uuid::new_v4();
        let mut updated = sample_model(id);
        updated.last_login = Some(Utc::now().fixed_offset());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id)]])
            .append_query_results(vec![vec![updated]])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let user = repo.record_login(UserId::from(id)).await.unwrap();

        assert!(user.last_login.is_some());
    }

    #[tokio::test]
    async fn test_record_login_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let err = repo.record_login(UserId::new()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::UserNotFound));
    }

    // =====================================================
    // delete_user
    // =====================================================

    #[tokio::test]
    async fn test_delete_user_cascades_and_reports_counts() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id)]])
            .append_exec_results([
                ok_exec(4), // saved links
                ok_exec(1), // profile
                ok_exec(2), // articles
                ok_exec(1), // user_groups
                ok_exec(0), // user_permissions
                ok_exec(1), // user
            ])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let summary = repo.delete_user(UserId::from(id)).await.unwrap();

        assert_eq!(
            summary,
            DeletedUserSummary {
                articles_deleted: 2,
                profile_deleted: true,
            }
        );
    }

    #[tokio::test]
    async fn test_delete_user_without_profile_or_articles() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id)]])
            .append_exec_results([
                ok_exec(0),
                ok_exec(0),
                ok_exec(0),
                ok_exec(0),
                ok_exec(0),
                ok_exec(1),
            ])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let summary = repo.delete_user(UserId::from(id)).await.unwrap();

        assert_eq!(summary, DeletedUserSummary::default());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let err = repo.delete_user(UserId::new()).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::UserNotFound));
    }

    #[tokio::test]
    async fn test_delete_user_database_error_mid_cascade() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id)]])
            .append_exec_results([ok_exec(0)])
            .append_exec_errors([DbErr::Custom("profiles locked".to_string())])
            .into_connection();
        let repo = UserRepositoryPostgres::new(Arc::new(db));

        let err = repo.delete_user(UserId::from(id)).await.unwrap_err();

        assert!(matches!(err, UserRepositoryError::DatabaseError(msg) if msg.contains("profiles locked")));
    }
}
