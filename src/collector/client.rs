//! JMX HTTP client
//!
//! Thin asynchronous client around the NameNode's `/jmx` servlet. One
//! GET per collection cycle; the configured timeout is the only bound
//! on a hung fetch, and its expiry is reported as a fetch failure.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::{debug, instrument};

use crate::error::FetchError;

/// HTTP client for the NameNode JMX endpoint
#[derive(Debug, Clone)]
pub struct JmxClient {
    client: Client,
    url: String,
    timeout_ms: u64,
}

impl JmxClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `url` - Full JMX servlet URL (e.g. "http://nn1:50070/jmx")
    /// * `timeout_ms` - Per-request timeout in milliseconds
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(url: &str, timeout_ms: u64) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_millis(timeout_ms))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(FetchError::ClientInit)?;

        Ok(Self {
            client,
            url: url.to_string(),
            timeout_ms,
        })
    }

    /// The configured JMX URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw status document.
    ///
    /// # Errors
    /// Fails on transport errors, timeout, or a non-2xx status. The
    /// body is returned unparsed; parsing is the document model's job.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        debug!("Fetching JMX document");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout_with_duration(self.timeout_ms)
            } else {
                FetchError::from(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::Response)?;
        debug!(bytes = body.len(), "JMX document fetched");

        Ok(body.to_vec())
    }
}
