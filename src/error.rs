//! Error types for namenode-exporter
//!
//! The taxonomy mirrors the stages of a collection cycle: fetching the
//! JMX document, parsing it, and extracting individual fields. Fetch
//! and parse failures abort the cycle; extraction failures only skip
//! the affected sample.

use thiserror::Error;

/// Result type for collection cycle operations
pub type CollectResult<T> = Result<T, CollectorError>;

/// Cycle-level failure: the whole scrape produced zero samples
#[derive(Error, Debug)]
pub enum CollectorError {
    /// The JMX document could not be fetched
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The fetched payload could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Transport-level failure talking to the JMX endpoint
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP client construction failed
    #[error("failed to initialize HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// Sending the request failed
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Reading the response body failed
    #[error("failed to read HTTP response: {0}")]
    Response(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("HTTP error status: {0}")]
    Status(u16),

    /// The request exceeded the configured timeout.
    /// The value is the configured timeout in milliseconds, if known.
    #[error("request timed out{}", .0.map(|ms| format!(" after {}ms", ms)).unwrap_or_default())]
    Timeout(Option<u64>),

    /// TCP/TLS connection to the endpoint failed
    #[error("connection failed: {0}")]
    Connection(String),
}

impl FetchError {
    /// Create a Timeout error with known duration
    pub fn timeout_with_duration(ms: u64) -> Self {
        FetchError::Timeout(Some(ms))
    }

    /// HTTP status code, when the failure carries one
    pub fn http_status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // The configured timeout duration is not recoverable from
            // reqwest::Error; use FetchError::timeout_with_duration()
            // at call sites that know it.
            FetchError::Timeout(None)
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if err.is_request() {
            FetchError::Request(err)
        } else {
            FetchError::Response(err)
        }
    }
}

/// The fetched payload is not a usable bean document
#[derive(Error, Debug)]
pub enum ParseError {
    /// Payload is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Top-level `beans` key is absent or not an array
    #[error("document has no `beans` array")]
    MissingBeans,
}

/// A single field could not be extracted from a matched bean.
///
/// Extraction failures never abort the cycle: the sample for the
/// offending field is skipped and sibling fields continue.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Expected field is not present on the bean
    #[error("field `{field}` missing on bean `{bean}`")]
    MissingField { field: String, bean: String },

    /// Field is present but carries the wrong JSON type
    #[error("field `{field}` on bean `{bean}` is not a {expected}")]
    WrongType {
        field: String,
        bean: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_with_duration() {
        let err = FetchError::timeout_with_duration(5000);
        assert_eq!(err.to_string(), "request timed out after 5000ms");
    }

    #[test]
    fn test_timeout_display_without_duration() {
        let err = FetchError::Timeout(None);
        assert_eq!(err.to_string(), "request timed out");
    }

    #[test]
    fn test_http_status_extraction() {
        assert_eq!(FetchError::Status(502).http_status(), Some(502));
        assert_eq!(FetchError::Timeout(None).http_status(), None);
    }

    #[test]
    fn test_extract_error_names_field_and_bean() {
        let err = ExtractError::WrongType {
            field: "TotalLoad".to_string(),
            bean: "Hadoop:service=NameNode,name=FSNamesystemState".to_string(),
            expected: "number",
        };
        let msg = err.to_string();
        assert!(msg.contains("TotalLoad"));
        assert!(msg.contains("FSNamesystemState"));
    }
}
