//! Local file enumerator
//!
//! Walks the source directory recursively and keeps regular files whose
//! extension matches the configured set. Matching is exact
//! (case-sensitive), so `photo.JPG` is not picked up by `jpg`, the same
//! behavior a brace-extension glob has.
//!
//! Enumeration order is whatever the directory walk yields; callers must
//! not rely on it.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use cfsync_core::domain::newtypes::ImageId;
use cfsync_core::domain::sync_item::LocalImage;

/// Enumerates image files under `source`.
///
/// Each result carries the id (path relative to `source`, forward-slash
/// separators) and the on-disk path. An empty result is valid; a missing
/// or unreadable source directory is an error.
pub fn scan_local_images(source: &Path, extensions: &[String]) -> Result<Vec<LocalImage>> {
    let mut images = Vec::new();

    for entry in WalkDir::new(source) {
        let entry = entry
            .with_context(|| format!("Failed to walk source directory {}", source.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(extension) = entry.path().extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !extensions.iter().any(|wanted| wanted == extension) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("Failed to relativize {}", entry.path().display()))?;
        let id = ImageId::from_relative_path(relative)?;

        images.push(LocalImage::new(id, entry.into_path()));
    }

    debug!(
        source = %source.display(),
        found = images.len(),
        "Local scan complete"
    );
    Ok(images)
}
