//! CLI argument parsing
//!
//! # Options
//!
//! - `--config` / `-c`: Configuration file path (default: config.yaml, env: NAMENODE_CONFIG)
//! - `--port` / `-p`: Server port (env: NAMENODE_PORT)
//! - `--bind-address`: Server bind address (env: NAMENODE_BIND_ADDRESS)
//! - `--telemetry-path`: Metrics endpoint path (env: NAMENODE_TELEMETRY_PATH)
//! - `--jmx-url`: NameNode JMX servlet URL (env: NAMENODE_JMX_URL)
//! - `--jmx-timeout`: Fetch timeout in milliseconds (env: NAMENODE_JMX_TIMEOUT)
//! - `--cluster`: cluster label value (env: NAMENODE_CLUSTER)
//! - `--hostname`: host label value (env: NAMENODE_HOSTNAME)
//! - `--log-level` / `-l`: Log level (trace/debug/info/warn/error, env: NAMENODE_LOG_LEVEL)
//!
//! # Precedence
//!
//! Configuration values resolve highest to lowest priority:
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// namenode-exporter - Prometheus exporter for Hadoop NameNode JMX metrics
///
/// Scrapes the NameNode's `/jmx` servlet on each pull and exposes a
/// fixed set of filesystem, datanode-health, and JVM gauges.
#[derive(Parser, Debug)]
#[command(name = "namenode-exporter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config.yaml",
        env = "NAMENODE_CONFIG"
    )]
    pub config: PathBuf,

    /// Server port (overrides config file)
    #[arg(short, long, value_name = "PORT", env = "NAMENODE_PORT")]
    pub port: Option<u16>,

    /// Server bind address (overrides config file)
    /// Supported values: IP addresses (0.0.0.0, 127.0.0.1, ::1) or "localhost"
    #[arg(long, value_name = "ADDRESS", env = "NAMENODE_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Telemetry endpoint path (overrides config file), must start with '/'
    #[arg(long, value_name = "PATH", env = "NAMENODE_TELEMETRY_PATH")]
    pub telemetry_path: Option<String>,

    /// NameNode JMX servlet URL (overrides config file)
    #[arg(long, value_name = "URL", env = "NAMENODE_JMX_URL")]
    pub jmx_url: Option<String>,

    /// JMX fetch timeout in milliseconds (overrides config file)
    #[arg(long, value_name = "MS", env = "NAMENODE_JMX_TIMEOUT")]
    pub jmx_timeout: Option<u64>,

    /// Value of the `cluster` label on every sample (overrides config file)
    #[arg(long, value_name = "NAME", env = "NAMENODE_CLUSTER")]
    pub cluster: Option<String>,

    /// Value of the `host` label on every sample (overrides config file)
    #[arg(long, value_name = "NAME", env = "NAMENODE_HOSTNAME")]
    pub hostname: Option<String>,

    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        env = "NAMENODE_LOG_LEVEL"
    )]
    pub log_level: LogLevel,
}

impl Cli {
    /// Apply CLI overrides onto a loaded configuration
    pub fn apply_to(&self, config: &mut crate::config::Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref addr) = self.bind_address {
            config.server.bind_address = addr.clone();
        }
        if let Some(ref path) = self.telemetry_path {
            config.server.path = path.clone();
        }
        if let Some(ref url) = self.jmx_url {
            config.jmx.url = url.clone();
        }
        if let Some(timeout) = self.jmx_timeout {
            config.jmx.timeout_ms = timeout;
        }
        if let Some(ref cluster) = self.cluster {
            config.labels.cluster = cluster.clone();
        }
        if let Some(ref hostname) = self.hostname {
            config.labels.host = hostname.clone();
        }
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level - default
    Info,
    /// Warn level
    Warn,
    /// Error level - least verbose
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}
