pub mod article_query;
pub mod article_repository;

pub use article_query::{ArticleQuery, ArticleQueryError};
pub use article_repository::{
    ArticleRepository, ArticleRepositoryError, CreateArticleData, PatchArticleData,
};
