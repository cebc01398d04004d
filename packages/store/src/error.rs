use common::ParseCharacterError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Reasons a match record is rejected before it reaches the database.
///
/// The `Display` text is meant to be shown to the end user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("MatchInfo requires a type/url")]
    MissingRequiredFields,

    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("MatchInfo YouTube video must have metadata")]
    MissingVideoMetadata,

    #[error("Winning character must be played by p1 or p2")]
    WinnerNotAPlayer,

    #[error(transparent)]
    UnknownCharacter(#[from] ParseCharacterError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Another record already uses the same `(url, video_timestamp)`.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint caught on write: {detail}");
                StoreError::ConstraintViolation(detail)
            }
            _ => StoreError::Database(err),
        }
    }
}

impl From<ParseCharacterError> for StoreError {
    fn from(err: ParseCharacterError) -> Self {
        StoreError::Validation(err.into())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
