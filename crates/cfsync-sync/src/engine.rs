//! Sync engine
//!
//! The [`SyncEngine`] orchestrates one synchronization run:
//!
//! 1. **Scan**: enumerate local files under the source root
//! 2. **Fetch**: page the remote inventory to exhaustion
//! 3. **Diff**: partition local files by presence of a remote record
//! 4. **Dispatch**: upload every missing file through a bounded
//!    concurrency window, counting completions
//!
//! ## Failure Policy
//!
//! Fail-fast: the first upload error fails the whole run. No new uploads
//! are scheduled after a failure and no partial-success report is
//! produced; in-flight siblings are cancelled at their next await point.
//! There is no retry anywhere.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures_util::stream::{self, TryStreamExt};
use tracing::{debug, info};

use cfsync_core::config::SyncConfig;
use cfsync_core::domain::sync_item::{LocalImage, SyncItem, SyncPlan};
use cfsync_core::ports::image_store::{IImageStore, RemoteImage};

use crate::scanner::scan_local_images;

// ============================================================================
// SyncResult
// ============================================================================

/// Summary of a completed synchronization run
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// Number of local files matching the extension set
    pub local_files: u64,
    /// Number of records in the remote inventory
    pub remote_records: u64,
    /// Number of files uploaded this run
    pub uploaded: u64,
    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

/// Progress callback: `(completed, total)` after each successful upload.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send + Sync>;

// ============================================================================
// SyncEngine
// ============================================================================

/// Orchestrates scan, fetch, diff, and the bounded upload dispatch.
pub struct SyncEngine {
    store: Arc<dyn IImageStore>,
    config: SyncConfig,
}

impl SyncEngine {
    /// Creates an engine over an image store and a validated configuration.
    pub fn new(store: Arc<dyn IImageStore>, config: SyncConfig) -> Self {
        Self { store, config }
    }

    /// Enumerates local files under the configured source root.
    pub fn scan_local(&self) -> Result<Vec<LocalImage>> {
        scan_local_images(&self.config.source, &self.config.extensions)
    }

    /// Fetches the complete remote inventory.
    pub async fn fetch_remote(&self) -> Result<Vec<RemoteImage>> {
        self.store
            .list_images()
            .await
            .context("Failed to list remote images")
    }

    /// Uploads every pending item with at most `parallel` in flight.
    ///
    /// Each item is read fully into memory and submitted exactly once.
    /// The completed count is incremented after each successful upload and
    /// reported through `progress`; the counter is atomic, so closely
    /// spaced completions never lose an increment.
    pub async fn upload_pending(
        &self,
        pending: Vec<SyncItem>,
        progress: Option<ProgressFn>,
    ) -> Result<u64> {
        if pending.is_empty() {
            return Ok(0);
        }

        let total = pending.len() as u64;
        let completed = AtomicU64::new(0);

        let store = self.store.as_ref();
        let completed_ref = &completed;
        let progress_ref = progress.as_ref();

        debug!(total, parallel = self.config.parallel, "Dispatching uploads");

        stream::iter(pending.into_iter().map(Ok::<SyncItem, anyhow::Error>))
            .try_for_each_concurrent(self.config.parallel, |item| async move {
                let content = tokio::fs::read(&item.local.local_path)
                    .await
                    .with_context(|| {
                        format!("Failed to read {}", item.local.local_path.display())
                    })?;

                store
                    .upload_image(&item.local.id, content)
                    .await
                    .with_context(|| format!("Failed to upload {}", item.local.id))?;

                let done = completed_ref.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(report) = progress_ref {
                    report(done, total);
                }
                Ok(())
            })
            .await?;

        Ok(completed.load(Ordering::Relaxed))
    }

    /// Runs one full synchronization cycle.
    ///
    /// When nothing needs uploading the dispatcher is never invoked and
    /// the run completes successfully with `uploaded == 0`.
    pub async fn sync(&self, progress: Option<ProgressFn>) -> Result<SyncResult> {
        let started = Instant::now();

        let locals = self.scan_local()?;
        info!(count = locals.len(), "Found local images");

        let remotes = self.fetch_remote().await?;
        info!(count = remotes.len(), "Found remote images");

        let local_files = locals.len() as u64;
        let remote_records = remotes.len() as u64;

        let plan = SyncPlan::build(locals, &remotes);

        let uploaded = if plan.is_up_to_date() {
            debug!("Nothing to upload");
            0
        } else {
            self.upload_pending(plan.pending, progress).await?
        };

        Ok(SyncResult {
            local_files,
            remote_records,
            uploaded,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}
