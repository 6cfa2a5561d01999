/// A field failed its declared constraint at write time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Phone number must start with a \"+\" and contain only digits")]
    InvalidPhoneNumber,

    #[error("{field} must be between 1 and 5, got {value}")]
    RatingOutOfRange { field: &'static str, value: i32 },

    #[error("Unknown gender: {0}")]
    InvalidGender(String),

    #[error("Permission codename may only contain lowercase letters, digits, '_' and '.'")]
    InvalidCodename,

    #[error("Invalid image reference: {0}")]
    InvalidImageRef(String),
}

/// Trims `value` and rejects it when nothing is left.
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(value)
}

/// Length limits count characters, not bytes.
pub fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
