use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::article::application::domain::entities::Article;
use crate::article::application::ports::incoming::use_cases::{
    PatchArticleCommand, PatchArticleError, PatchArticleUseCase,
};
use crate::article::application::ports::outgoing::{ArticleRepository, ArticleRepositoryError};
use crate::auth::application::domain::entities::UserId;

pub struct PatchArticleService<R>
where
    R: ArticleRepository,
{
    article_repository: R,
}

impl<R> PatchArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(article_repository: R) -> Self {
        Self { article_repository }
    }
}

#[async_trait]
impl<R> PatchArticleUseCase for PatchArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        article_id: Uuid,
        command: PatchArticleCommand,
    ) -> Result<Article, PatchArticleError> {
        let data = command.validate()?;

        let article = self
            .article_repository
            .patch_article(author, article_id, data)
            .await
            .map_err(|e| match e {
                // another author's article is indistinguishable from a missing one
                ArticleRepositoryError::NotFound | ArticleRepositoryError::AuthorNotFound => {
                    PatchArticleError::NotFound
                }
                ArticleRepositoryError::DatabaseError(msg) => PatchArticleError::RepositoryError(msg),
            })?;

        info!(article_id = %article.id, "Article updated");
        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::application::domain::value_objects::ArticleRatings;
    use crate::article::application::ports::outgoing::{CreateArticleData, PatchArticleData};
    use crate::shared::domain::{PatchField, ValidationError};
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockArticleRepo {
        owner: Option<UserId>,
        seen: Mutex<Option<PatchArticleData>>,
    }

    #[async_trait]
    impl ArticleRepository for MockArticleRepo {
        async fn create_article(
            &self,
            _data: CreateArticleData,
        ) -> Result<Article, ArticleRepositoryError> {
            unimplemented!("not needed for patch tests")
        }

        async fn patch_article(
            &self,
            author: UserId,
            article_id: Uuid,
            data: PatchArticleData,
        ) -> Result<Article, ArticleRepositoryError> {
            if self.owner != Some(author) {
                return Err(ArticleRepositoryError::NotFound);
            }
            *self.seen.lock().unwrap() = Some(data.clone());
            Ok(Article {
                id: article_id,
                author_id: author,
                title: data.title.as_value().cloned().unwrap_or_else(|| "Old".to_string()),
                content: "Body".to_string(),
                image: None,
                ratings: ArticleRatings::default(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn delete_article(
            &self,
            _author: UserId,
            _article_id: Uuid,
        ) -> Result<(), ArticleRepositoryError> {
            unimplemented!("not needed for patch tests")
        }
    }

    #[tokio::test]
    async fn test_execute_passes_validated_patch() {
        let author = UserId::new();
        let svc = PatchArticleService::new(MockArticleRepo {
            owner: Some(author),
            ..Default::default()
        });
        let command = PatchArticleCommand {
            title: PatchField::Value(" Gili T ".to_string()),
            ..Default::default()
        };

        let article = svc.execute(author, Uuid::new_v4(), command).await.unwrap();

        assert_eq!(article.title, "Gili T");
        let seen = svc.article_repository.seen.lock().unwrap().clone().unwrap();
        assert!(seen.content.is_unset());
    }

    #[tokio::test]
    async fn test_execute_other_author_is_not_found() {
        let svc = PatchArticleService::new(MockArticleRepo {
            owner: Some(UserId::new()),
            ..Default::default()
        });

        let err = svc
            .execute(UserId::new(), Uuid::new_v4(), PatchArticleCommand::default())
            .await
            .unwrap_err();

        assert!(matches!(err, PatchArticleError::NotFound));
    }

    #[tokio::test]
    async fn test_execute_rejects_invalid_patch_before_repository() {
        let author = UserId::new();
        let svc = PatchArticleService::new(MockArticleRepo {
            owner: Some(author),
            ..Default::default()
        });
        let command = PatchArticleCommand {
            content: PatchField::Null,
            ..Default::default()
        };

        let err = svc.execute(author, Uuid::new_v4(), command).await.unwrap_err();

        assert!(matches!(
            err,
            PatchArticleError::Validation(ValidationError::Required("content"))
        ));
        assert!(svc.article_repository.seen.lock().unwrap().is_none());
    }
}
