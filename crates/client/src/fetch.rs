//! Fetch gateway: the seam between query building and HTTP.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientResult;

/// Request timeout for the bundled HTTP fetcher.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Boundary between the client and the network.
///
/// Implementations return the decoded JSON payload, or `None` when the
/// endpoint produced no usable body; that is the explicit "no data" signal
/// the snapshot cache turns into an absent map entry. Production code uses
/// [`HttpFetcher`]; tests substitute scripted implementations via
/// [`Client::with_fetcher`](crate::Client::with_fetcher).
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and decode the response body as JSON.
    async fn fetch(&self, url: &str) -> ClientResult<Option<Value>>;
}

/// Reqwest-backed fetcher used by [`Client::new`](crate::Client::new).
///
/// One shared connection pool per client; any timeout or retry policy
/// beyond the per-request timeout lives here, not in the query layer.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a pooled connection and request timeout.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> ClientResult<Option<Value>> {
        debug!(url = %url, "content API request");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let payload: Value = response.json().await?;

        if payload.is_null() {
            return Ok(None);
        }

        Ok(Some(payload))
    }
}
