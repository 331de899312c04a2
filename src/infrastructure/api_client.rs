//! HTTP client for the Nowledge Mem threads API.
//!
//! Wraps the two operations the importer needs: paginated listing of
//! existing threads and creation of new ones.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{ApiConfig, AppError, RemoteThread, Result, Thread};

/// Failure of a single thread-creation call.
///
/// These are per-record outcomes and never abort the run; the message is
/// shown to the user next to the affected thread. No retries are made.
#[derive(Debug, Error)]
pub enum CreateError {
    /// Non-success response from the service.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Could not connect to the service at all.
    #[error("Connection failed: is Nowledge Mem running at {base_url}?")]
    Connection { base_url: String },

    /// The request hit the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Anything else (DNS, protocol, body decode, ...).
    #[error("Request failed: {0}")]
    Other(String),
}

/// One page of the `/threads` listing.
#[derive(Debug, Deserialize)]
struct ThreadPage {
    #[serde(default)]
    threads: Vec<RemoteThread>,
    #[serde(default)]
    pagination: Pagination,
}

#[derive(Debug, Deserialize, Default)]
struct Pagination {
    #[serde(default)]
    has_more: bool,
}

/// Client for the `/threads` endpoint of a Nowledge Mem instance.
pub struct ThreadsClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ThreadsClient {
    /// Build a client from an explicit endpoint configuration.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn threads_url(&self) -> String {
        format!("{}/threads", self.config.base_url.trim_end_matches('/'))
    }

    /// Fetch every thread currently stored on the service.
    ///
    /// Pages through the listing until the server reports no further
    /// pages. A failed or unreachable listing is not fatal: a warning is
    /// emitted, whatever was accumulated so far is returned, and dedupe
    /// degrades to treating nothing as a duplicate.
    pub async fn list_threads(&self) -> Vec<RemoteThread> {
        let mut all = Vec::new();
        let mut offset = 0usize;

        loop {
            let result = self
                .client
                .get(self.threads_url())
                .query(&[("limit", self.config.page_size), ("offset", offset)])
                .send()
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) if e.is_connect() => {
                    tracing::warn!(
                        "Cannot reach {}; skipping duplicate check",
                        self.config.base_url
                    );
                    break;
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch existing threads: {e}");
                    break;
                }
            };

            if !response.status().is_success() {
                tracing::warn!(
                    "Failed to fetch existing threads: HTTP {}",
                    response.status().as_u16()
                );
                break;
            }

            let page: ThreadPage = match response.json().await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Failed to decode thread listing: {e}");
                    break;
                }
            };

            all.extend(page.threads);

            if !page.pagination.has_more {
                break;
            }
            offset += self.config.page_size;
        }

        all
    }

    /// Create one thread on the service.
    ///
    /// Returns the server-assigned id on success. Each failure cause maps
    /// to a distinct [`CreateError`] message.
    pub async fn create_thread(&self, thread: &Thread) -> std::result::Result<String, CreateError> {
        let response = self
            .client
            .post(self.threads_url())
            .json(thread)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CreateError::Timeout
                } else if e.is_connect() {
                    CreateError::Connection {
                        base_url: self.config.base_url.clone(),
                    }
                } else {
                    CreateError::Other(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CreateError::Api {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CreateError::Other(e.to_string()))?;

        Ok(value
            .pointer("/thread/id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown")
            .to_string())
    }
}

/// Truncate a response body to 200 bytes on a char boundary.
fn truncate_body(body: &str) -> String {
    const MAX_BODY: usize = 200;

    if body.len() <= MAX_BODY {
        return body.to_string();
    }

    let mut end = MAX_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
