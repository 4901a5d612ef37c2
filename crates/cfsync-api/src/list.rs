//! Remote inventory listing with pagination
//!
//! Cloudflare's Images listing endpoint is page-numbered: the client asks
//! for fixed-size pages starting at page 1 and increments until a page
//! comes back empty. There is no continuation token and no guard against
//! the collection being mutated mid-listing.
//!
//! Exhausting pagination this way is not suitable for accounts with very
//! large inventories, but it matches the endpoint's contract and is fine
//! at the scale this tool targets.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use cfsync_core::ports::image_store::RemoteImage;

use crate::client::{ensure_success, ImagesClient, IMAGES_PATH};

/// Fixed number of records requested per page.
pub const PAGE_SIZE: u32 = 100;

// ============================================================================
// Cloudflare API response types (JSON deserialization)
// ============================================================================

/// Envelope returned by `GET /images/v1`.
///
/// The full envelope also carries `success`, `errors`, and `messages`
/// fields; only `result.images` is consumed.
#[derive(Debug, Deserialize)]
struct ListImagesEnvelope {
    result: ListImagesResult,
}

/// The `result` object of a listing response.
#[derive(Debug, Deserialize)]
struct ListImagesResult {
    #[serde(default)]
    images: Vec<ApiImage>,
}

/// One image record as returned on the wire.
#[derive(Debug, Deserialize)]
struct ApiImage {
    /// Image id; equals the relative-path id for images this tool uploaded
    id: String,
    /// Stored filename
    #[serde(default)]
    filename: String,
    /// Upload timestamp, RFC 3339
    uploaded: DateTime<Utc>,
    /// Whether delivery URLs must be signed
    #[serde(rename = "requireSignedURLs", default)]
    require_signed_urls: bool,
    /// Delivery variant URLs
    #[serde(default)]
    variants: Vec<String>,
}

impl From<ApiImage> for RemoteImage {
    fn from(image: ApiImage) -> Self {
        Self {
            id: image.id,
            filename: image.filename,
            uploaded: image.uploaded,
            require_signed_urls: image.require_signed_urls,
            variants: image.variants,
        }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// Fetches the complete remote inventory, one page at a time.
///
/// Requests `per_page=100` pages starting at page 1 and stops at the first
/// empty page. Any non-success status on any page aborts the whole listing
/// with the status code and response body in the error; no partial result
/// is returned.
pub async fn list_all_images(client: &ImagesClient) -> Result<Vec<RemoteImage>> {
    let mut images: Vec<RemoteImage> = Vec::new();
    let mut page: u32 = 1;

    loop {
        let path = format!("{IMAGES_PATH}?per_page={PAGE_SIZE}&page={page}");

        let response = client
            .request(Method::GET, &path)
            .send()
            .await
            .with_context(|| format!("Failed to send image listing request (page {page})"))?;

        let envelope: ListImagesEnvelope = ensure_success(response, "Image listing")
            .await?
            .json()
            .await
            .with_context(|| format!("Failed to parse image listing response (page {page})"))?;

        if envelope.result.images.is_empty() {
            break;
        }

        debug!(
            page,
            records = envelope.result.images.len(),
            "Received inventory page"
        );

        images.extend(envelope.result.images.into_iter().map(RemoteImage::from));
        page += 1;
    }

    debug!(total = images.len(), pages = page, "Inventory listing complete");
    Ok(images)
}
