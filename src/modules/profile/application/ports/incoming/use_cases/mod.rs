mod adjust_points;
mod create_profile;
mod get_profile;
mod saved_articles;
mod update_profile;

pub use adjust_points::{AdjustPointsError, AdjustPointsUseCase};
pub use create_profile::{CreateProfileCommand, CreateProfileError, CreateProfileUseCase};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use saved_articles::{SavedArticlesError, SavedArticlesUseCase};
pub use update_profile::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase};
