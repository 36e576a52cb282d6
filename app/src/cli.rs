//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line and environment configuration for the server binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// The gapminder export the original dashboard serves.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/gapminder_unfiltered.csv";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Country comparison dashboard server")]
pub struct Args {
    /// URL of the indicator CSV to serve.
    #[arg(long, env = "DATASET_URL", default_value = DEFAULT_DATASET_URL)]
    pub dataset_url: String,

    /// Local CSV path; takes precedence over the URL when set.
    #[arg(long, env = "DATASET_PATH")]
    pub dataset_path: Option<PathBuf>,

    /// Address to bind the HTTP server to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8050")]
    pub bind_addr: SocketAddr,
}
