use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::article::adapter::outgoing::{ArticleQueryPostgres, ArticleRepositoryPostgres};
use crate::article::application::article_use_cases::ArticleUseCases;
use crate::article::application::services::{
    CreateArticleService, DeleteArticleService, GetArticleService, PatchArticleService,
};
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::services::{
    AuthenticateUserService, DeleteUserService, UserFactoryService,
};
use crate::authorization::adapter::outgoing::{
    AuthorizationQueryPostgres, GroupRepositoryPostgres, MembershipRepositoryPostgres,
    PermissionRepositoryPostgres,
};
use crate::authorization::application::authorization_use_cases::AuthorizationUseCases;
use crate::authorization::application::services::{
    CheckPermissionService, CreateGroupService, CreatePermissionService, ManageMembershipService,
};
use crate::profile::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::services::{
    AdjustPointsService, CreateProfileService, GetProfileService, SavedArticlesService,
    UpdateProfileService,
};

/// Every use case, wired to the Postgres adapters.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub authorization: AuthorizationUseCases,
    pub article: ArticleUseCases,
    pub profile: ProfileUseCases,
}

impl AppState {
    pub fn new(
        db: Arc<DatabaseConnection>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        let user_repo = UserRepositoryPostgres::new(db.clone());
        let user_query = UserQueryPostgres::new(db.clone());

        let auth = AuthUseCases {
            factory: Arc::new(UserFactoryService::new(
                user_repo.clone(),
                user_query.clone(),
                password_hasher.clone(),
            )),
            authenticate: Arc::new(AuthenticateUserService::new(
                user_repo.clone(),
                user_query.clone(),
                password_hasher,
            )),
            delete: Arc::new(DeleteUserService::new(user_repo)),
        };

        let authorization = AuthorizationUseCases {
            create_group: Arc::new(CreateGroupService::new(GroupRepositoryPostgres::new(
                db.clone(),
            ))),
            create_permission: Arc::new(CreatePermissionService::new(
                PermissionRepositoryPostgres::new(db.clone()),
            )),
            membership: Arc::new(ManageMembershipService::new(
                MembershipRepositoryPostgres::new(db.clone()),
            )),
            check: Arc::new(CheckPermissionService::new(
                user_query,
                AuthorizationQueryPostgres::new(db.clone()),
            )),
        };

        let article_repo = ArticleRepositoryPostgres::new(db.clone());
        let article = ArticleUseCases {
            create: Arc::new(CreateArticleService::new(article_repo.clone())),
            get: Arc::new(GetArticleService::new(ArticleQueryPostgres::new(db.clone()))),
            patch: Arc::new(PatchArticleService::new(article_repo.clone())),
            delete: Arc::new(DeleteArticleService::new(article_repo)),
        };

        let profile_repo = ProfileRepositoryPostgres::new(db.clone());
        let profile_query = ProfileQueryPostgres::new(db);
        let profile = ProfileUseCases {
            create: Arc::new(CreateProfileService::new(profile_repo.clone())),
            get: Arc::new(GetProfileService::new(profile_query.clone())),
            update: Arc::new(UpdateProfileService::new(profile_repo.clone())),
            adjust_points: Arc::new(AdjustPointsService::new(profile_repo.clone())),
            saved_articles: Arc::new(SavedArticlesService::new(profile_repo, profile_query)),
        };

        Self {
            auth,
            authorization,
            article,
            profile,
        }
    }
}
