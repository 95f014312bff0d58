//! CLI entry point for the mosaic tile ordering tool

use clap::Parser;
use mosaicorder::io::cli::{Cli, OrderingProcessor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> mosaicorder::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mosaicorder=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    let cli = Cli::parse();
    OrderingProcessor::new(cli).process()
}
