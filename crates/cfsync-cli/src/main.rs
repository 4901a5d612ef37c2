//! cfsync CLI - upload a local image directory to Cloudflare Images
//!
//! One implicit command: diff the local directory against the remote
//! inventory by relative-path id, then upload whatever is missing,
//! bounded by `--parallel`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod output;
mod progress;

use cfsync_api::client::ImagesClient;
use cfsync_api::provider::CloudflareImageStore;
use cfsync_core::config::{self, SyncConfig};
use cfsync_core::domain::sync_item::SyncPlan;
use cfsync_sync::engine::{ProgressFn, SyncEngine};
use output::{get_formatter, OutputFormat, OutputFormatter};

#[derive(Debug, Parser)]
#[command(
    name = "cfsync",
    version,
    about = "Upload a local image directory to Cloudflare Images"
)]
pub struct Cli {
    /// Local directory to sync
    #[arg(long)]
    source: PathBuf,

    /// Cloudflare account ID
    #[arg(long)]
    account: String,

    /// Number of files to upload in parallel
    #[arg(long, default_value_t = config::DEFAULT_PARALLEL)]
    parallel: usize,

    /// Comma-separated list of file extensions to process
    #[arg(long, default_value = config::DEFAULT_EXTENSIONS)]
    ext: String,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let formatter = get_formatter(format);

    if let Err(err) = run(cli, &*formatter).await {
        formatter.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    // All validation happens before any network or filesystem access.
    let config = SyncConfig::new(
        cli.source,
        &cli.account,
        config::api_token_from_env(),
        cli.parallel,
        &cli.ext,
    )?;

    info!(
        account = %config.account,
        source = %config.source.display(),
        parallel = config.parallel,
        "Configuration loaded"
    );

    let started = Instant::now();

    let client = ImagesClient::new(config.account.clone(), config.api_token.clone());
    let store = Arc::new(CloudflareImageStore::new(client));
    let engine = SyncEngine::new(store, config);

    let locals = engine.scan_local()?;
    formatter.success(&format!("Found {} local images", locals.len()));

    let remotes = engine.fetch_remote().await?;
    formatter.success(&format!("Found {} remote images", remotes.len()));

    let local_count = locals.len();
    let remote_count = remotes.len();
    let plan = SyncPlan::build(locals, &remotes);

    if plan.is_up_to_date() {
        formatter.success("There are no files to sync");
        formatter.print_json(&summary(local_count, remote_count, 0, started));
        return Ok(());
    }

    let total = plan.pending.len() as u64;
    formatter.info(&format!("{} files need upload", total));

    let bar = progress::upload_bar(total, cli.json);
    let reporter: ProgressFn = {
        let bar = bar.clone();
        Box::new(move |done, _total| bar.set_position(done))
    };

    let uploaded = engine.upload_pending(plan.pending, Some(reporter)).await?;
    bar.finish_and_clear();

    formatter.success(&format!("Synced {} files", uploaded));
    formatter.print_json(&summary(local_count, remote_count, uploaded, started));

    Ok(())
}

/// Machine-readable run summary for `--json` mode.
fn summary(
    local_files: usize,
    remote_records: usize,
    uploaded: u64,
    started: Instant,
) -> serde_json::Value {
    serde_json::json!({
        "local_files": local_files,
        "remote_records": remote_records,
        "uploaded": uploaded,
        "duration_ms": started.elapsed().as_millis() as u64,
    })
}
