use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    AuthenticateUserUseCase, DeleteUserUseCase, UserFactoryUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub factory: Arc<dyn UserFactoryUseCase + Send + Sync>,
    pub authenticate: Arc<dyn AuthenticateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
}
