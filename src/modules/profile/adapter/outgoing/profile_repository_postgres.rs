use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryResult, Set, Statement,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::{
    CreateProfileData, PatchProfileData, ProfileRepository, ProfileRepositoryError,
};
use crate::shared::db_error::{classify, DbFailure};
use crate::shared::domain::PatchField;

use super::sea_orm_entity::profiles::{self, ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ProfileRepositoryError {
        error!(error = %e, "Profile write failed");
        ProfileRepositoryError::DatabaseError(e.to_string())
    }

    fn to_domain(model: profiles::Model) -> Result<Profile, ProfileRepositoryError> {
        model.to_domain().map_err(|e| {
            ProfileRepositoryError::DatabaseError(format!("stored profile is invalid: {}", e))
        })
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<profiles::Model, ProfileRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ProfileRepositoryError::ProfileNotFound)
    }

    /// Reads the `profile_ok` / `article_ok` flags returned by the saved-article statements.
    fn check_targets(row: Option<QueryResult>) -> Result<(), ProfileRepositoryError> {
        let row = row.ok_or_else(|| {
            ProfileRepositoryError::DatabaseError("saved article statement returned no row".to_string())
        })?;
        let profile_ok: bool = row.try_get("", "profile_ok").map_err(Self::map_db_err)?;
        let article_ok: bool = row.try_get("", "article_ok").map_err(Self::map_db_err)?;

        if !profile_ok {
            return Err(ProfileRepositoryError::ProfileNotFound);
        }
        if !article_ok {
            return Err(ProfileRepositoryError::ArticleNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.into()),
            profile_picture_ref: Set(data.profile_picture.map(|p| p.into_inner())),
            bio: Set(data.bio),
            gender: Set(data.gender.map(|g| g.code().to_string())),
            points: Set(0),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| match classify(&e) {
            DbFailure::UniqueViolation(_) => ProfileRepositoryError::ProfileAlreadyExists,
            DbFailure::ForeignKeyViolation(_) => ProfileRepositoryError::UserNotFound,
            DbFailure::Other(_) => Self::map_db_err(e),
        })?;

        Self::to_domain(inserted)
    }

    async fn patch_profile(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let user_uuid: Uuid = user_id.into();

        if data.is_empty() {
            return Self::to_domain(self.find_by_user(user_uuid).await?);
        }

        let mut model = ActiveModel {
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };
        if let PatchField::Value(bio) = data.bio {
            model.bio = Set(bio);
        }
        if let Some(gender) = data.gender.into_change() {
            model.gender = Set(gender.map(|g| g.code().to_string()));
        }
        if let Some(picture) = data.profile_picture.into_change() {
            model.profile_picture_ref = Set(picture.map(|p| p.into_inner()));
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::UserId.eq(user_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        Self::to_domain(updated)
    }

    async fn adjust_points(
        &self,
        user_id: UserId,
        delta: i32,
    ) -> Result<Profile, ProfileRepositoryError> {
        // widened to bigint so the sum cannot overflow before clamping
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE profiles
            SET points = GREATEST(LEAST(points::bigint + $2, 2147483647), -2147483648)::integer,
                updated_at = CURRENT_TIMESTAMP
            WHERE user_id = $1
            RETURNING *
            "#,
            vec![Uuid::from(user_id).into(), i64::from(delta).into()],
        );

        let updated = Entity::find()
            .from_raw_sql(stmt)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        Self::to_domain(updated)
    }

    async fn save_article(
        &self,
        user_id: UserId,
        article_id: Uuid,
    ) -> Result<(), ProfileRepositoryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            WITH p AS (SELECT id FROM profiles WHERE user_id = $1),
                 a AS (SELECT id FROM articles WHERE id = $2),
                 ins AS (
                     INSERT INTO profile_saved_articles (profile_id, article_id)
                     SELECT p.id, a.id FROM p, a
                     ON CONFLICT (profile_id, article_id) DO NOTHING
                     RETURNING 1
                 )
            SELECT EXISTS (SELECT 1 FROM p) AS profile_ok,
                   EXISTS (SELECT 1 FROM a) AS article_ok
            "#,
            vec![Uuid::from(user_id).into(), article_id.into()],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| match classify(&e) {
            // article deleted between the existence check and the insert
            DbFailure::ForeignKeyViolation(_) => ProfileRepositoryError::ArticleNotFound,
            _ => Self::map_db_err(e),
        })?;

        Self::check_targets(row)
    }

    async fn unsave_article(
        &self,
        user_id: UserId,
        article_id: Uuid,
    ) -> Result<(), ProfileRepositoryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            WITH p AS (SELECT id FROM profiles WHERE user_id = $1),
                 a AS (SELECT id FROM articles WHERE id = $2),
                 del AS (
                     DELETE FROM profile_saved_articles s
                     USING p
                     WHERE s.profile_id = p.id AND s.article_id = $2
                     RETURNING 1
                 )
            SELECT EXISTS (SELECT 1 FROM p) AS profile_ok,
                   EXISTS (SELECT 1 FROM a) AS article_ok
            "#,
            vec![Uuid::from(user_id).into(), article_id.into()],
        );

        let row = self.db.query_one(stmt).await.map_err(Self::map_db_err)?;

        Self::check_targets(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::application::domain::value_objects::Gender;
    use crate::shared::domain::ImageRef;
    use maplit::btreemap;
    use sea_orm::{MockDatabase, RuntimeErr, Value};

    fn sample_model(user_id: Uuid, points: i32) -> profiles::Model {
        let now = Utc::now().fixed_offset();
        profiles::Model {
            id: Uuid::new_v4(),
            user_id,
            profile_picture_ref: Some("profile_pics/me.png".to_string()),
            bio: "Hiker".to_string(),
            gender: Some("F".to_string()),
            points,
            created_at: now,
            updated_at: now,
        }
    }

    fn target_flags_row(profile_ok: bool, article_ok: bool) -> std::collections::BTreeMap<&'static str, Value> {
        btreemap! {
            "profile_ok" => Value::Bool(Some(profile_ok)),
            "article_ok" => Value::Bool(Some(article_ok)),
        }
    }

    // =====================================================
    // create_profile
    // =====================================================

    #[tokio::test]
    async fn test_create_profile_success() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_model(user_id, 0)]])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let profile = repo
            .create_profile(CreateProfileData {
                user_id: UserId::from(user_id),
                bio: "Hiker".to_string(),
                gender: Some(Gender::Female),
                profile_picture: Some(ImageRef::parse("profile_pics/me.png").unwrap()),
            })
            .await
            .unwrap();

        assert_eq!(profile.user_id, UserId::from(user_id));
        assert_eq!(profile.gender, Some(Gender::Female));
        assert_eq!(profile.points, 0);
    }

    #[tokio::test]
    async fn test_create_profile_duplicate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"profiles_user_id_key\"".to_string(),
            ))])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let err = repo
            .create_profile(CreateProfileData {
                user_id: UserId::new(),
                bio: String::new(),
                gender: None,
                profile_picture: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProfileRepositoryError::ProfileAlreadyExists));
    }

    #[tokio::test]
    async fn test_create_profile_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "insert or update on table \"profiles\" violates foreign key constraint \"fk_profiles_user_id\"".to_string(),
            ))])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let err = repo
            .create_profile(CreateProfileData {
                user_id: UserId::new(),
                bio: String::new(),
                gender: None,
                profile_picture: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProfileRepositoryError::UserNotFound));
    }

    // =====================================================
    // patch_profile / adjust_points
    // =====================================================

    #[tokio::test]
    async fn test_patch_profile_returns_updated_row() {
        let user_id = Uuid::new_v4();
        let mut updated = sample_model(user_id, 3);
        updated.gender = None;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![updated]])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let profile = repo
            .patch_profile(
                UserId::from(user_id),
                PatchProfileData {
                    gender: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(profile.gender.is_none());
        assert_eq!(profile.bio, "Hiker");
    }

    #[tokio::test]
    async fn test_patch_profile_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<profiles::Model>::new()])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let err = repo
            .patch_profile(
                UserId::new(),
                PatchProfileData {
                    bio: PatchField::Value("x".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProfileRepositoryError::ProfileNotFound));
    }

    #[tokio::test]
    async fn test_adjust_points_returns_new_total() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_model(user_id, 25)]])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let profile = repo.adjust_points(UserId::from(user_id), 20).await.unwrap();

        assert_eq!(profile.points, 25);
    }

    #[tokio::test]
    async fn test_adjust_points_missing_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<profiles::Model>::new()])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let err = repo.adjust_points(UserId::new(), 1).await.unwrap_err();

        assert!(matches!(err, ProfileRepositoryError::ProfileNotFound));
    }

    // =====================================================
    // save_article / unsave_article
    // =====================================================

    #[tokio::test]
    async fn test_save_article_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![target_flags_row(true, true)]])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert!(repo.save_article(UserId::new(), Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_save_article_reports_missing_targets() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![target_flags_row(false, true)], vec![target_flags_row(true, false)]])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let no_profile = repo.save_article(UserId::new(), Uuid::new_v4()).await.unwrap_err();
        let no_article = repo.save_article(UserId::new(), Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(no_profile, ProfileRepositoryError::ProfileNotFound));
        assert!(matches!(no_article, ProfileRepositoryError::ArticleNotFound));
    }

    #[tokio::test]
    async fn test_save_article_concurrent_article_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "insert or update on table \"profile_saved_articles\" violates foreign key constraint \"fk_profile_saved_articles_article_id\"".to_string(),
            ))])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let err = repo.save_article(UserId::new(), Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, ProfileRepositoryError::ArticleNotFound));
    }

    #[tokio::test]
    async fn test_unsave_article_ok_and_missing_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![target_flags_row(true, true)], vec![target_flags_row(false, true)]])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert!(repo.unsave_article(UserId::new(), Uuid::new_v4()).await.is_ok());
        assert!(matches!(
            repo.unsave_article(UserId::new(), Uuid::new_v4()).await.unwrap_err(),
            ProfileRepositoryError::ProfileNotFound
        ));
    }
}
