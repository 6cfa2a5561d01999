use serde::Serialize;

use crate::shared::domain::{max_chars, required, ValidationError};

pub const TITLE_MAX_LEN: usize = 100;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = required("title", raw)?;
        max_chars("title", raw, TITLE_MAX_LEN)?;
        Ok(Self(raw.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    /// Blank content is rejected, but the stored body keeps its own whitespace.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        required("content", raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(field: &'static str, value: i32) -> Result<Self, ValidationError> {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(ValidationError::RatingOutOfRange { field, value });
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(RATING_MIN as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ArticleRatings {
    pub cleanliness: Rating,
    pub affordability: Rating,
    pub service: Rating,
}

impl ArticleRatings {
    pub fn new(cleanliness: i32, affordability: i32, service: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            cleanliness: Rating::new("cleanliness_rating", cleanliness)?,
            affordability: Rating::new("affordability_rating", affordability)?,
            service: Rating::new("service_rating", service)?,
        })
    }
}
