use std::sync::Arc;

use crate::article::application::ports::incoming::use_cases::{
    CreateArticleUseCase, DeleteArticleUseCase, GetArticleUseCase, PatchArticleUseCase,
};

#[derive(Clone)]
pub struct ArticleUseCases {
    pub create: Arc<dyn CreateArticleUseCase + Send + Sync>,
    pub get: Arc<dyn GetArticleUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchArticleUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteArticleUseCase + Send + Sync>,
}
