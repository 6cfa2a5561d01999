use serde::Serialize;

use super::validation::{max_chars, ValidationError};

const IMAGE_REF_MAX_LEN: usize = 255;

/// Upload area an image reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    ArticleImage,
    ProfilePicture,
}

impl ImageKind {
    pub fn upload_dir(&self) -> &'static str {
        match self {
            ImageKind::ArticleImage => "article_images/",
            ImageKind::ProfilePicture => "profile_pics/",
        }
    }
}

/// Relative path of an uploaded image, as returned by the asset storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(ValidationError::InvalidImageRef("empty path".to_string()));
        }
        max_chars("image", &value, IMAGE_REF_MAX_LEN)?;
        if value.starts_with('/') || value.starts_with('\\') {
            return Err(ValidationError::InvalidImageRef(value));
        }
        if value.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(ValidationError::InvalidImageRef(value));
        }

        Ok(Self(value))
    }

    /// Blank input means "no image".
    pub fn parse_optional(value: Option<String>) -> Result<Option<Self>, ValidationError> {
        match value {
            Some(v) if !v.trim().is_empty() => Self::parse(v).map(Some),
            _ => Ok(None),
        }
    }

    /// Accepts only references inside `kind`'s upload directory. Input from
    /// callers goes through here; rows already stored use `parse`.
    pub fn parse_as(kind: ImageKind, value: impl Into<String>) -> Result<Self, ValidationError> {
        let image = Self::parse(value)?;
        match image.0.strip_prefix(kind.upload_dir()) {
            Some(file) if !file.is_empty() => Ok(image),
            _ => Err(ValidationError::InvalidImageRef(image.0)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
