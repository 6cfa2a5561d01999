pub mod sea_orm_entity;
mod authorization_query_postgres;
mod group_repository_postgres;
mod membership_repository_postgres;
mod permission_repository_postgres;

pub use authorization_query_postgres::AuthorizationQueryPostgres;
pub use group_repository_postgres::GroupRepositoryPostgres;
pub use membership_repository_postgres::MembershipRepositoryPostgres;
pub use permission_repository_postgres::PermissionRepositoryPostgres;
