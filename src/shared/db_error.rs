use sea_orm::{DbErr, SqlErr};

/// What a failed write tells us about the constraint it hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbFailure {
    UniqueViolation(String),
    ForeignKeyViolation(String),
    Other(String),
}

impl DbFailure {
    /// Whether the database message names `constraint` (or column).
    pub fn mentions(&self, constraint: &str) -> bool {
        match self {
            DbFailure::UniqueViolation(detail)
            | DbFailure::ForeignKeyViolation(detail)
            | DbFailure::Other(detail) => detail.contains(constraint),
        }
    }
}

/// Classifies a sea-orm error. Driver-level SQLSTATE is preferred; the
/// message fallback covers errors that arrive already stringified.
pub fn classify(err: &DbErr) -> DbFailure {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            return DbFailure::UniqueViolation(detail)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return DbFailure::ForeignKeyViolation(detail)
        }
        _ => {}
    }

    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("23505")
        || lowered.contains("duplicate key")
        || lowered.contains("unique constraint")
    {
        DbFailure::UniqueViolation(message)
    } else if lowered.contains("23503") || lowered.contains("foreign key constraint") {
        DbFailure::ForeignKeyViolation(message)
    } else {
        DbFailure::Other(message)
    }
}
