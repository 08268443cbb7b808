//! [`JsonTransport`] adapter backed by `reqwest`.

use async_trait::async_trait;
use gravestone_application::ports::json_transport::{JsonRequest, JsonTransport, TransportError};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches JSON documents over HTTP(S).
///
/// Headers come from each [`JsonRequest`]; the client itself only carries
/// the timeout. Non-2xx statuses and bodies that are not JSON are errors.
pub struct ReqwestJsonTransport {
    client: reqwest::Client,
}

impl ReqwestJsonTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connection(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else {
        TransportError::Connection(err.to_string())
    }
}

#[async_trait]
impl JsonTransport for ReqwestJsonTransport {
    async fn get_json(&self, request: &JsonRequest) -> Result<Value, TransportError> {
        let start = Instant::now();

        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(send_error)?;
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::decode(e)
            }
        })?;

        debug!(
            "GET {} -> {} in {} ms",
            url,
            status.as_u16(),
            start.elapsed().as_millis()
        );
        Ok(body)
    }
}
