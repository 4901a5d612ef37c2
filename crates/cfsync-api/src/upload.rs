//! Image upload
//!
//! Uploads one image per request as `multipart/form-data` with two fields:
//! `file` (the binary content) and `id` (the relative-path id). Setting a
//! custom id makes the delivery URL keep the original relative filename,
//! which is also what keeps future diffs by id correct.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::debug;

use cfsync_core::domain::newtypes::ImageId;

use crate::client::{ensure_success, ImagesClient, IMAGES_PATH};

/// Uploads a single image under the given id.
///
/// # Arguments
/// * `client` - The authenticated ImagesClient
/// * `id` - Relative-path id; becomes both the multipart filename and the
///   custom image id
/// * `content` - Full file contents
///
/// # Errors
/// Returns an error if the request fails or the API responds with a
/// non-success status (status code and body text are included). The
/// response body of a successful upload is not consumed.
pub async fn upload_image(client: &ImagesClient, id: &ImageId, content: Vec<u8>) -> Result<()> {
    debug!(id = %id, bytes = content.len(), "Uploading image");

    let file_part = Part::bytes(content).file_name(id.to_string());
    let form = Form::new()
        .part("file", file_part)
        .text("id", id.to_string());

    let response = client
        .request(Method::POST, IMAGES_PATH)
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("Failed to send upload request for {id}"))?;

    ensure_success(response, "Image upload").await?;

    debug!(id = %id, "Upload completed");
    Ok(())
}
