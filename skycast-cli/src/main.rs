//! Binary crate for the `skycast` terminal weather dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Prompting for a city when none was given
//! - Human-friendly rendering of the fetched view state

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
