//! Document question answering over object storage.
//!
//! With `--key`/`--query` the program runs one load and/or one answer and
//! exits; with neither it drops into the interactive session.

mod commands;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use doc_store::{ObjectStoreClient, StoreConfig};
use inference_service::{CompletionService, config::default_config};

use crate::session::DocSession;

/// Ask questions about a document stored in an object-store bucket.
#[derive(Debug, Parser)]
#[command(name = "rag-cli", version, about)]
struct Args {
    /// Region the model runtime and store are served from.
    #[arg(long, default_value = "us-east-1")]
    region: String,

    /// Object-store bucket holding the documents.
    #[arg(long)]
    bucket: String,

    /// Object key to load before answering; omit for interactive mode.
    #[arg(long)]
    key: Option<String>,

    /// One-shot question; omit for interactive mode.
    #[arg(long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let store = ObjectStoreClient::new(StoreConfig::for_region(&args.region, &args.bucket))?;
    let completions = CompletionService::new(default_config::config_grounded(&args.region)?)?;
    let mut session = DocSession::new(store, completions);

    match (args.key.as_deref(), args.query.as_deref()) {
        (None, None) => session.run_interactive().await,
        (key, query) => session.run_once(key, query).await,
    }
}
