use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::ImageRef;

use super::value_objects::Gender;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: UserId,
    pub profile_picture: Option<ImageRef>,
    pub bio: String,
    pub gender: Option<Gender>,
    pub points: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Points after applying `delta`, clamped to the i32 range.
    pub fn points_after(&self, delta: i32) -> i32 {
        self.points.saturating_add(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_points(points: i32) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            user_id: UserId::new(),
            profile_picture: None,
            bio: String::new(),
            gender: None,
            points,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn points_can_go_negative() {
        assert_eq!(profile_with_points(3).points_after(-10), -7);
    }

    #[test]
    fn points_saturate_at_the_bounds() {
        assert_eq!(profile_with_points(i32::MAX - 1).points_after(5), i32::MAX);
        assert_eq!(profile_with_points(i32::MIN + 1).points_after(-5), i32::MIN);
    }
}
