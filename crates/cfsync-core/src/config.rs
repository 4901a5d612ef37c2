//! Configuration module for cfsync.
//!
//! The tool is single-shot and stateless, so configuration comes entirely
//! from CLI arguments plus one environment variable. Everything is
//! validated here, before any network or filesystem access happens.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::newtypes::AccountId;

/// Environment variable holding the Cloudflare API token.
pub const API_TOKEN_ENV: &str = "CLOUDFLARE_API_TOKEN";

/// Default number of concurrent uploads.
pub const DEFAULT_PARALLEL: usize = 10;

/// Default extension set for the local scanner.
pub const DEFAULT_EXTENSIONS: &str = "jpg,jpeg,png";

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Configuration errors, all raised before any I/O.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API token environment variable is unset (or empty).
    #[error("Missing CLOUDFLARE_API_TOKEN environment variable")]
    MissingToken,

    /// The account argument was empty.
    #[error("Missing --account argument")]
    MissingAccount,

    /// The concurrency limit must be a positive integer.
    #[error("--parallel must be a positive integer")]
    InvalidParallel,
}

// ---------------------------------------------------------------------------
// SyncConfig
// ---------------------------------------------------------------------------

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Local directory to sync.
    pub source: PathBuf,
    /// Cloudflare account the images belong to.
    pub account: AccountId,
    /// Bearer token for the Cloudflare API.
    pub api_token: String,
    /// Maximum number of uploads in flight at once.
    pub parallel: usize,
    /// File extensions the scanner keeps (no leading dot).
    pub extensions: Vec<String>,
}

impl SyncConfig {
    /// Build a validated configuration from raw argument values.
    ///
    /// `account` and `parallel` are validated here; `extensions` is parsed
    /// from its comma-separated form. The token is passed in explicitly so
    /// callers (and tests) control where it comes from; see
    /// [`api_token_from_env`].
    pub fn new(
        source: PathBuf,
        account: &str,
        api_token: Option<String>,
        parallel: usize,
        extensions: &str,
    ) -> Result<Self, ConfigError> {
        let account = AccountId::new(account).map_err(|_| ConfigError::MissingAccount)?;

        let api_token = match api_token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(ConfigError::MissingToken),
        };

        if parallel == 0 {
            return Err(ConfigError::InvalidParallel);
        }

        Ok(Self {
            source,
            account,
            api_token,
            parallel,
            extensions: parse_extensions(extensions),
        })
    }
}

/// Read the Cloudflare API token from the environment.
///
/// An unset or empty variable is treated as missing; there is no default.
pub fn api_token_from_env() -> Option<String> {
    env::var(API_TOKEN_ENV).ok().filter(|t| !t.is_empty())
}

/// Split a comma-separated extension list, dropping empty segments.
fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}
