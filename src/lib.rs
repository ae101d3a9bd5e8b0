//! namenode-exporter library
//!
//! This crate scrapes a Hadoop NameNode's JMX servlet on each pull
//! request and re-exposes a fixed set of filesystem, datanode-health,
//! and JVM statistics as labeled Prometheus gauges.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod exporter;
pub mod server;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging subsystem
///
/// # Arguments
/// * `level` - Log level string (trace, debug, info, warn, error)
///
/// # Errors
/// Returns an error if the logging system fails to initialize
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
