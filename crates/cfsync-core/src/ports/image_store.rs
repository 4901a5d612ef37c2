//! Image store port (driven/secondary port)
//!
//! Defines the interface for the remote image-hosting service. The primary
//! implementation targets Cloudflare Images in `cfsync-api`, but the trait
//! keeps the sync engine provider-agnostic and testable with an in-memory
//! double.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific and don't need domain-level classification.
//! - `RemoteImage` is a port-level DTO owned by the remote service; the
//!   tool only ever reads it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::newtypes::ImageId;

// ============================================================================
// RemoteImage DTO
// ============================================================================

/// One record from the remote image inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteImage {
    /// Remote identifier; equals the relative-path id for images uploaded
    /// by this tool.
    pub id: String,
    /// Filename as stored by the service.
    pub filename: String,
    /// When the image was uploaded.
    pub uploaded: DateTime<Utc>,
    /// Whether delivery URLs must be signed.
    pub require_signed_urls: bool,
    /// Delivery variant URLs for this image.
    pub variants: Vec<String>,
}

// ============================================================================
// IImageStore port
// ============================================================================

/// Remote image-hosting service operations.
#[async_trait]
pub trait IImageStore: Send + Sync {
    /// Returns the complete remote inventory.
    ///
    /// Implementations paginate the listing endpoint to exhaustion; a
    /// failure on any page fails the whole listing with no partial result.
    async fn list_images(&self) -> anyhow::Result<Vec<RemoteImage>>;

    /// Uploads one image under the given id.
    ///
    /// The id doubles as the stored filename so that future diffs by id
    /// remain correct. Any non-success response is an error.
    async fn upload_image(&self, id: &ImageId, content: Vec<u8>) -> anyhow::Result<()>;
}
