use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::ImageRef;

use super::value_objects::ArticleRatings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: Uuid,
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub image: Option<ImageRef>,
    pub ratings: ArticleRatings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
