mod create_article;
mod delete_article;
mod get_article;
mod patch_article;

pub use create_article::{CreateArticleCommand, CreateArticleError, CreateArticleUseCase};
pub use delete_article::{DeleteArticleError, DeleteArticleUseCase};
pub use get_article::{GetArticleError, GetArticleUseCase};
pub use patch_article::{PatchArticleCommand, PatchArticleError, PatchArticleUseCase};
