//! Domain error types
//!
//! Validation failures raised when constructing domain values. These are
//! detected before any network or filesystem access occurs.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid image identifier (empty, or wrong separator style)
    #[error("Invalid image id: {0}")]
    InvalidImageId(String),

    /// Invalid account identifier
    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),

    /// Path could not be expressed relative to the source root
    #[error("Path not within source root: {0}")]
    PathNotInSourceRoot(String),
}
