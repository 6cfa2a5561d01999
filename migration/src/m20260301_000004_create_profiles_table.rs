use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profiles table (one per user)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::ProfilePictureRef)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::Bio)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Profiles::Gender).string_len(1).null())
                    .col(
                        ColumnDef::new(Profiles::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user_id")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE profiles
                ADD CONSTRAINT ck_profiles_gender
                CHECK (gender IS NULL OR gender IN ('M', 'F', 'O'));
                "#,
            )
            .await?;

        // =====================================================
        // Saved articles join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProfileSavedArticles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfileSavedArticles::ProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfileSavedArticles::ArticleId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfileSavedArticles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(ProfileSavedArticles::ProfileId)
                            .col(ProfileSavedArticles::ArticleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_saved_articles_profile_id")
                            .from(ProfileSavedArticles::Table, ProfileSavedArticles::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_saved_articles_article_id")
                            .from(ProfileSavedArticles::Table, ProfileSavedArticles::ArticleId)
                            .to(Articles::Table, Articles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // "saved by" lookups from the article side
        manager
            .create_index(
                Index::create()
                    .name("idx_profile_saved_articles_article_id")
                    .table(ProfileSavedArticles::Table)
                    .col(ProfileSavedArticles::ArticleId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER profiles_touch_updated_at
                BEFORE UPDATE ON profiles
                FOR EACH ROW
                EXECUTE FUNCTION touch_updated_at();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileSavedArticles::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS profiles_touch_updated_at ON profiles")
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    UserId,
    ProfilePictureRef,
    Bio,
    Gender,
    Points,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProfileSavedArticles {
    Table,
    ProfileId,
    ArticleId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
}
