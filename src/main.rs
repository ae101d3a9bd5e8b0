//! namenode-exporter - Prometheus exporter for Hadoop NameNode JMX metrics
//!
//! This binary serves a Prometheus-compatible telemetry endpoint that
//! fetches the NameNode's JMX status document on each scrape.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use namenode_exporter::{cli::Cli, config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    namenode_exporter::init_logging(&cli.log_level.to_string())?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting namenode-exporter"
    );

    let mut config = Config::load_or_default(&cli.config)?;
    cli.apply_to(&mut config);
    config.validate()?;

    info!(
        jmx_url = %config.jmx.url,
        cluster = %config.labels.cluster,
        host = %config.labels.host,
        "Scrape target configured"
    );

    server::run(config).await?;

    Ok(())
}
