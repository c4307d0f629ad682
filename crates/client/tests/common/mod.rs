#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)]
//! Common test utilities for integration tests.
//!
//! Tests never touch the network: [`MockFetcher`] implements the client's
//! fetch-gateway seam with scripted responses and records every request URL
//! so ordering and wire-format expectations can be asserted exactly.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use raccolta_client::{Client, ClientConfig, ClientResult, Fetcher};

/// Scripted fetcher: answers the first response whose needle is a substring
/// of the requested URL, `None` otherwise.
pub struct MockFetcher {
    responses: Vec<(String, Value)>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script a response for any URL containing `needle`.
    pub fn respond(mut self, needle: &str, payload: Value) -> Self {
        self.responses.push((needle.to_string(), payload));
        self
    }

    /// Every URL fetched so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> ClientResult<Option<Value>> {
        self.requests.lock().unwrap().push(url.to_string());

        for (needle, payload) in &self.responses {
            if url.contains(needle.as_str()) {
                return Ok(Some(payload.clone()));
            }
        }

        Ok(None)
    }
}

/// Base URL used across the integration tests.
pub const BASE_URL: &str = "https://cms.example.com/api";

/// Build a client over `fetcher` with the given configuration.
pub fn client_with(config: ClientConfig, fetcher: &Arc<MockFetcher>) -> Client {
    Client::with_fetcher(config, Arc::clone(fetcher) as Arc<dyn Fetcher>).unwrap()
}

/// One collection entry payload.
pub fn entry_json(slug: &str, locale: &str, collection: &str, mount: Option<&str>) -> Value {
    let mut entry = json!({
        "id": format!("{collection}-{slug}"),
        "title": slug,
        "slug": slug,
        "locale": locale,
        "collection": { "title": collection, "handle": collection },
    });

    if let Some(handle) = mount {
        entry["mount"] = json!({ "title": handle, "handle": handle });
    }

    entry
}

/// A list envelope with pagination metadata.
pub fn page_json(data: Value) -> Value {
    let total = data.as_array().map(Vec::len).unwrap_or_default();

    json!({
        "data": data,
        "meta": {
            "current_page": 1,
            "from": 1,
            "last_page": 1,
            "links": [],
            "path": BASE_URL,
            "per_page": 25,
            "to": total,
            "total": total,
        },
        "links": {
            "first": format!("{BASE_URL}?page=1"),
            "last": format!("{BASE_URL}?page=1"),
            "prev": null,
        },
    })
}
