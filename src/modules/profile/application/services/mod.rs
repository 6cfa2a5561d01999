mod adjust_points_service;
mod create_profile_service;
mod get_profile_service;
mod saved_articles_service;
mod update_profile_service;

pub use adjust_points_service::AdjustPointsService;
pub use create_profile_service::CreateProfileService;
pub use get_profile_service::GetProfileService;
pub use saved_articles_service::SavedArticlesService;
pub use update_profile_service::UpdateProfileService;
