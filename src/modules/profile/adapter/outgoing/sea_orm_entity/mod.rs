pub mod profile_saved_articles;
pub mod profiles;
