use crate::shared::domain::{max_chars, required, ValidationError};

pub const GROUP_NAME_MAX_LEN: usize = 150;
pub const CODENAME_MAX_LEN: usize = 100;
pub const PERMISSION_NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupName(String);

impl GroupName {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = required("name", raw)?;
        max_chars("name", raw, GROUP_NAME_MAX_LEN)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Lowercase ASCII letters, digits, `_` and `.` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codename(String);

impl Codename {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = required("codename", raw)?;
        max_chars("codename", raw, CODENAME_MAX_LEN)?;
        let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.';
        if !raw.chars().all(allowed) {
            return Err(ValidationError::InvalidCodename);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionName(String);

impl PermissionName {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = required("name", raw)?;
        max_chars("name", raw, PERMISSION_NAME_MAX_LEN)?;
        Ok(Self(raw.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_name_is_trimmed_and_bounded() {
        assert_eq!(GroupName::parse("  editors ").unwrap().as_str(), "editors");
        assert_eq!(GroupName::parse(""), Err(ValidationError::Required("name")));
        assert!(matches!(
            GroupName::parse(&"g".repeat(151)),
            Err(ValidationError::TooLong { max: 150, .. })
        ));
    }

    #[test]
    fn codename_charset_is_enforced() {
        assert!(Codename::parse("article.delete_any").is_ok());
        assert!(Codename::parse("v2.publish").is_ok());
        assert_eq!(
            Codename::parse("Delete Article"),
            Err(ValidationError::InvalidCodename)
        );
        assert_eq!(
            Codename::parse("article-delete"),
            Err(ValidationError::InvalidCodename)
        );
    }

    #[test]
    fn permission_name_is_required() {
        assert_eq!(
            PermissionName::parse("  "),
            Err(ValidationError::Required("name"))
        );
        assert!(PermissionName::parse("Can delete any article").is_ok());
    }
}
