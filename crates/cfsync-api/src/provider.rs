//! CloudflareImageStore - IImageStore implementation for Cloudflare Images
//!
//! Wraps the [`ImagesClient`] and delegates to the [`list`](crate::list)
//! and [`upload`](crate::upload) modules to fulfil the
//! [`IImageStore`] port contract.

use anyhow::Result;
use async_trait::async_trait;

use cfsync_core::domain::newtypes::ImageId;
use cfsync_core::ports::image_store::{IImageStore, RemoteImage};

use crate::client::ImagesClient;
use crate::{list, upload};

/// Adapter that bridges the [`IImageStore`] port to the Cloudflare API.
pub struct CloudflareImageStore {
    client: ImagesClient,
}

impl CloudflareImageStore {
    /// Create a new store over an already-configured client.
    #[must_use]
    pub fn new(client: ImagesClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IImageStore for CloudflareImageStore {
    async fn list_images(&self) -> Result<Vec<RemoteImage>> {
        list::list_all_images(&self.client).await
    }

    async fn upload_image(&self, id: &ImageId, content: Vec<u8>) -> Result<()> {
        upload::upload_image(&self.client, id, content).await
    }
}
