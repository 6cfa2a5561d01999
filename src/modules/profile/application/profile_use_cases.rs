use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    AdjustPointsUseCase, CreateProfileUseCase, GetProfileUseCase, SavedArticlesUseCase,
    UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub create: Arc<dyn CreateProfileUseCase + Send + Sync>,
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub adjust_points: Arc<dyn AdjustPointsUseCase + Send + Sync>,
    pub saved_articles: Arc<dyn SavedArticlesUseCase + Send + Sync>,
}
