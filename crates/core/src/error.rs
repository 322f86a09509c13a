use thiserror::Error;

/// Rejected caller input, detected before any storage work happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("invalid release date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid link '{value}': {reason}")]
    InvalidLink { value: String, reason: String },

    #[error("invalid limit '{0}', expected a positive integer")]
    InvalidLimit(String),

    #[error("invalid offset '{0}', expected a non-negative integer")]
    InvalidOffset(String),

    #[error("update request contains no fields")]
    EmptyUpdate,
}
