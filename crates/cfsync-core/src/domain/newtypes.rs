//! Domain newtypes with validation
//!
//! Strongly-typed wrappers for the identifiers cfsync joins on. Each
//! newtype ensures validity at construction time, so downstream code never
//! sees an empty account id or a backslash-separated image id.

use std::fmt::{self, Display, Formatter};
use std::path::{Component, Path};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ============================================================================
// ImageId
// ============================================================================

/// The cross-system join key: a file's path relative to the source root.
///
/// Always uses forward-slash separators, on every platform. The same value
/// is stored remotely as the image's custom id, which is what makes
/// diffing local files against the remote inventory by id correct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    /// Create an `ImageId` from an already-normalized string.
    ///
    /// Rejects empty strings and backslash separators; the join contract
    /// requires forward slashes regardless of the local platform.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidImageId(
                "must not be empty".to_string(),
            ));
        }
        if id.contains('\\') {
            return Err(DomainError::InvalidImageId(format!(
                "must use forward-slash separators: {id}"
            )));
        }
        Ok(Self(id))
    }

    /// Build an `ImageId` from a path relative to the source root.
    ///
    /// Joins the path components with `/`, so the resulting id is stable
    /// across platforms with different native separators.
    pub fn from_relative_path(path: &Path) -> Result<Self, DomainError> {
        let mut parts = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => {
                    let part = part.to_str().ok_or_else(|| {
                        DomainError::InvalidImageId(format!(
                            "path is not valid UTF-8: {}",
                            path.display()
                        ))
                    })?;
                    parts.push(part);
                }
                other => {
                    return Err(DomainError::InvalidImageId(format!(
                        "path must be relative and normalized, found {other:?}"
                    )))
                }
            }
        }
        Self::new(parts.join("/"))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ImageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ImageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// AccountId
// ============================================================================

/// Cloudflare account identifier.
///
/// The account id is interpolated into every API URL, so an empty value is
/// rejected up front rather than producing a confusing 404 later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create an `AccountId`, rejecting empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidAccountId(
                "must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The account id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
