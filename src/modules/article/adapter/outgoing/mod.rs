pub mod sea_orm_entity;
mod article_query_postgres;
mod article_repository_postgres;

pub use article_query_postgres::ArticleQueryPostgres;
pub use article_repository_postgres::ArticleRepositoryPostgres;
