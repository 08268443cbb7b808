//! JSON transport port
//!
//! Defines the single capability the lookup needs from the network: fetch a
//! JSON document for a URL, query string and headers. Adapters live in the
//! infrastructure layer; tests substitute scripted fixtures.

use async_trait::async_trait;
use thiserror::Error;

/// A GET request for a JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl JsonRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First query value for `key`
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First header value for `name` (case-insensitive)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Errors that can occur while fetching a JSON document
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("API error ({code}): {info}")]
    Api { code: String, info: String },
}

impl TransportError {
    pub fn decode(err: impl std::fmt::Display) -> Self {
        TransportError::Decode(err.to_string())
    }
}

/// Port for fetching JSON documents
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn get_json(&self, request: &JsonRequest) -> Result<serde_json::Value, TransportError>;
}
