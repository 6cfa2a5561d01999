pub mod article;
pub mod auth;
pub mod authorization;
pub mod profile;
