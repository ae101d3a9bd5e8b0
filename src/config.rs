//! Configuration management
//!
//! Loads and validates configuration from an optional YAML file. CLI
//! flags and environment variables override file values; see `cli.rs`
//! for the precedence rules.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Error parsing the configuration file
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// NameNode JMX endpoint configuration
    #[serde(default)]
    pub jmx: JmxConfig,

    /// Static instance labels attached to every sample
    #[serde(default)]
    pub labels: LabelsConfig,

    /// Metric name namespace prefix
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Telemetry endpoint path
    #[serde(default = "default_telemetry_path")]
    pub path: String,
}

/// NameNode JMX endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JmxConfig {
    /// JMX servlet URL
    #[serde(default = "default_jmx_url")]
    pub url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

/// Instance label values ({cluster, host})
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Cluster identifier label value
    #[serde(default = "default_cluster")]
    pub cluster: String,

    /// Host name label value
    #[serde(default = "default_host")]
    pub host: String,
}

// Default value functions
fn default_bind_address() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    9070
}

fn default_telemetry_path() -> String {
    "/metrics".to_string()
}

fn default_jmx_url() -> String {
    "http://localhost:50070/jmx".to_string()
}

fn default_timeout() -> u64 {
    5000
}

fn default_cluster() -> String {
    "testcluster".to_string()
}

fn default_host() -> String {
    "hdfs1".to_string()
}

fn default_namespace() -> String {
    "namenode".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            jmx: JmxConfig::default(),
            labels: LabelsConfig::default(),
            namespace: default_namespace(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            path: default_telemetry_path(),
        }
    }
}

impl Default for JmxConfig {
    fn default() -> Self {
        Self {
            url: default_jmx_url(),
            timeout_ms: default_timeout(),
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            cluster: default_cluster(),
            host: default_host(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if !self.server.path.starts_with('/') {
            return Err(ConfigError::ValidationError(
                "Telemetry path must start with '/'".to_string(),
            ));
        }

        let url = Url::parse(&self.jmx.url).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid JMX URL '{}': {}", self.jmx.url, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::ValidationError(format!(
                "JMX URL must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.labels.cluster.is_empty() || self.labels.host.is_empty() {
            return Err(ConfigError::ValidationError(
                "Label values `cluster` and `host` must be non-empty".to_string(),
            ));
        }

        if self.namespace.is_empty() {
            return Err(ConfigError::ValidationError(
                "Namespace must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
