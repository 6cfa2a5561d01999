pub mod app;
pub mod config;
pub mod modules;
pub mod shared;

pub use modules::article;
pub use modules::auth;
pub use modules::authorization;
pub use modules::profile;
