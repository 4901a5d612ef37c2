//! Upload progress bar
//!
//! One bar for the whole upload phase, driven by the engine's progress
//! callback. Hidden in JSON mode so machine output stays clean.

use indicatif::{ProgressBar, ProgressStyle};

/// Creates the upload progress bar, or a hidden one for JSON mode.
pub fn upload_bar(total: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} Syncing files {pos}/{len} [{bar:40.cyan/blue}]")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}
