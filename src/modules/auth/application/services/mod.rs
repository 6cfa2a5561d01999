mod authenticate_user_service;
mod delete_user_service;
mod user_factory_service;

pub use authenticate_user_service::AuthenticateUserService;
pub use delete_user_service::DeleteUserService;
pub use user_factory_service::UserFactoryService;
