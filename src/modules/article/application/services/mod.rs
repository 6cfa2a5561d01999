mod create_article_service;
mod delete_article_service;
mod get_article_service;
mod patch_article_service;

pub use create_article_service::CreateArticleService;
pub use delete_article_service::DeleteArticleService;
pub use get_article_service::GetArticleService;
pub use patch_article_service::PatchArticleService;
