use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Permission {
    pub id: Uuid,
    /// Machine name checked by `has_permission`, e.g. `article.delete_any`.
    pub codename: String,
    /// Human readable label.
    pub name: String,
}
