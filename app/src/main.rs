//! FILENAME: app/src/main.rs
// PURPOSE: Server binary entry point: load the dataset, serve the dashboard.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use app_lib::cli::Args;
use app_lib::{create_app_state, Server};
use dataset::Dataset;

fn setup_tracing() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to init tracing: {e}"))?;
    Ok(())
}

async fn load_dataset(args: &Args) -> Result<Dataset> {
    if let Some(path) = &args.dataset_path {
        tracing::info!(path = %path.display(), "loading dataset from disk");
        return Ok(ingest::read_dataset_from_path(path)?);
    }

    tracing::info!(url = %args.dataset_url, "fetching dataset");
    let body = reqwest::get(&args.dataset_url)
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(ingest::read_dataset(body.as_bytes())?)
}

async fn run(args: Args) -> Result<()> {
    setup_tracing()?;

    let dataset = load_dataset(&args).await?;
    tracing::info!(
        records = dataset.len(),
        countries = dataset.countries().len(),
        "dataset loaded"
    );

    let state = Arc::new(create_app_state(dataset));
    Server::new(state).run(args.bind_addr).await
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(args))
}
