//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The derived title exceeds the 200-byte storage limit.
    #[error("title exceeds 200 character limit")]
    TitleTooLong,

    /// The `activeAt` value is not a valid `YYYY-MM-DD` calendar date.
    #[error("activeAt '{0}' has invalid format, expected YYYY-MM-DD")]
    InvalidActiveAt(String),
}

/// Errors returned while parsing task identifiers from caller input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTaskIdError {
    /// The identifier is empty after trimming.
    #[error("empty id param")]
    Empty,

    /// The identifier is not a syntactically valid UUID.
    #[error("invalid id param: {0}")]
    Malformed(String),
}
