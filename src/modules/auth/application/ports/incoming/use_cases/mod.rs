mod authenticate_user;
mod delete_user;
mod user_factory;

pub use authenticate_user::{AuthenticateUserError, AuthenticateUserUseCase};
pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use user_factory::{CreateUserCommand, CreateUserError, UserFactoryUseCase};
