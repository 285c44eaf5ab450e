//! Creative generation error types

use thiserror::Error;

/// Errors that can occur while generating content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreativeError {
    /// No content type was given; there is nothing to key templates on
    #[error("Content type must not be empty")]
    EmptyContentType,

    /// Creative requests need a brief to describe
    #[error("Brief must not be empty")]
    EmptyBrief,
}

/// Result type alias for creative operations
pub type CreativeResult<T> = Result<T, CreativeError>;
