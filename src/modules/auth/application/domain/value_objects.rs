use email_address::EmailAddress;
use regex::Regex;
use std::sync::OnceLock;

use crate::shared::domain::{max_chars, required, ValidationError};

pub const EMAIL_MAX_LEN: usize = 254;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PHONE_NUMBER_MAX_LEN: usize = 15;

fn phone_number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+[0-9]+$").expect("phone number pattern is valid"))
}

/// Normalized, syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Lowercases the domain part (after the last `@`); the local part is kept as given.
    pub fn normalize(raw: &str) -> String {
        let trimmed = raw.trim();
        match trimmed.rsplit_once('@') {
            Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
            None => trimmed.to_string(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = required("email", raw)?;
        let normalized = Self::normalize(raw);

        max_chars("email", &normalized, EMAIL_MAX_LEN)?;
        if !EmailAddress::is_valid(&normalized) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = required("username", raw)?;
        max_chars("username", raw, USERNAME_MAX_LEN)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// `+` followed by digits only, at most 15 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        max_chars("phone_number", raw, PHONE_NUMBER_MAX_LEN)?;
        if !phone_number_pattern().is_match(raw) {
            return Err(ValidationError::InvalidPhoneNumber);
        }
        Ok(Self(raw.to_string()))
    }

    /// An absent or empty value means "no phone number".
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match raw {
            Some(value) if !value.is_empty() => Self::parse(value).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
