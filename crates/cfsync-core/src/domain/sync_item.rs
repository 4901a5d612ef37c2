//! Sync items and the diff engine
//!
//! A [`LocalImage`] is one file found under the source root. A [`SyncItem`]
//! joins it with the matching remote record, if any. [`SyncPlan::build`] is
//! the pure diff: it partitions the local set into files already present
//! remotely and files that still need an upload.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::newtypes::ImageId;
use crate::ports::image_store::RemoteImage;

// ============================================================================
// LocalImage
// ============================================================================

/// A local image file discovered by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    /// Path relative to the source root; the cross-system join key.
    pub id: ImageId,
    /// Absolute path on the local filesystem.
    pub local_path: PathBuf,
}

impl LocalImage {
    /// Create a new `LocalImage`.
    #[must_use]
    pub fn new(id: ImageId, local_path: PathBuf) -> Self {
        Self { id, local_path }
    }
}

// ============================================================================
// SyncItem
// ============================================================================

/// A local image joined with its remote counterpart, if one exists.
///
/// `remote` being `Some` means the image is already synced; `None` means
/// it needs an upload. The join is request-scoped and recomputed on every
/// run.
#[derive(Debug, Clone)]
pub struct SyncItem {
    /// The local file.
    pub local: LocalImage,
    /// The matching remote record, keyed by id.
    pub remote: Option<RemoteImage>,
}

impl SyncItem {
    /// Returns true if this item still needs to be uploaded.
    #[must_use]
    pub fn needs_upload(&self) -> bool {
        self.remote.is_none()
    }
}

// ============================================================================
// SyncPlan - the diff engine
// ============================================================================

/// The partition of the local file set produced by the diff engine.
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    /// Local files that already have a remote record with the same id.
    pub synced: Vec<SyncItem>,
    /// Local files with no remote counterpart; these will be uploaded.
    pub pending: Vec<SyncItem>,
}

impl SyncPlan {
    /// Join local files against remote records by id and partition them.
    ///
    /// Pure function: exact-match hashed lookup keyed by the relative-path
    /// id. Every local file lands in exactly one of the two partitions.
    /// Duplicate remote ids are not expected; if they occur, the first
    /// occurrence wins.
    #[must_use]
    pub fn build(locals: Vec<LocalImage>, remotes: &[RemoteImage]) -> Self {
        let mut index: HashMap<&str, &RemoteImage> = HashMap::with_capacity(remotes.len());
        for remote in remotes {
            index.entry(remote.id.as_str()).or_insert(remote);
        }

        let mut plan = Self::default();
        for local in locals {
            let remote = index.get(local.id.as_str()).map(|r| (*r).clone());
            let item = SyncItem { local, remote };
            if item.needs_upload() {
                plan.pending.push(item);
            } else {
                plan.synced.push(item);
            }
        }
        plan
    }

    /// Returns true when there is nothing left to upload.
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total number of local files covered by this plan.
    #[must_use]
    pub fn total_local(&self) -> usize {
        self.synced.len() + self.pending.len()
    }
}
