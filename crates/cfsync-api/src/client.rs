//! Cloudflare Images API client
//!
//! Provides a typed HTTP client for the Cloudflare Images v1 API. Handles
//! the account-scoped base URL, bearer authentication, and the shared
//! non-success status check.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cfsync_api::client::ImagesClient;
//! use cfsync_core::domain::newtypes::AccountId;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let account = AccountId::new("0123abcd")?;
//! let client = ImagesClient::new(account, "api-token-here");
//! let images = cfsync_api::list::list_all_images(&client).await?;
//! println!("{} images remote", images.len());
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use cfsync_core::domain::newtypes::AccountId;
use reqwest::{Client, Method, RequestBuilder, Response};

/// Base URL for the Cloudflare client API v4
const CLOUDFLARE_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Path of the Images v1 endpoint relative to the account root
pub(crate) const IMAGES_PATH: &str = "/images/v1";

// ============================================================================
// ImagesClient
// ============================================================================

/// HTTP client for Cloudflare Images API calls
///
/// Wraps `reqwest::Client` with bearer authentication and account-scoped
/// URL construction. All endpoints live under
/// `{base}/accounts/{account_id}`.
pub struct ImagesClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
    /// Account the image inventory belongs to
    account: AccountId,
    /// Cloudflare API bearer token
    api_token: String,
}

impl ImagesClient {
    /// Creates a new client against the production Cloudflare API.
    ///
    /// # Arguments
    /// * `account` - The Cloudflare account id
    /// * `api_token` - A token with Images read/write permission
    pub fn new(account: AccountId, api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: CLOUDFLARE_BASE_URL.to_string(),
            account,
            api_token: api_token.into(),
        }
    }

    /// Creates a client with a custom base URL (useful for testing).
    pub fn with_base_url(
        account: AccountId,
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            account,
            api_token: api_token.into(),
        }
    }

    /// Returns the account this client operates on.
    pub fn account(&self) -> &AccountId {
        &self.account
    }

    /// Creates an authenticated request builder for the given method and path.
    ///
    /// The path is relative to the account root, e.g.
    /// `/images/v1?per_page=100&page=1`.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!(
            "{}/accounts/{}{}",
            self.base_url,
            self.account.as_str(),
            path
        );
        self.client
            .request(method, &url)
            .bearer_auth(&self.api_token)
    }
}

/// Fails a non-success response with its status code and body text.
///
/// The body is read so API error details (Cloudflare returns a JSON error
/// envelope) end up in the message rather than being discarded.
pub(crate) async fn ensure_success(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_string());
    anyhow::bail!("{operation} failed with status {status}: {body}")
}
