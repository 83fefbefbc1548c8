//! Asynchronous quote fetching from the remote API.
//!
//! Callers treat every `Err` the same way: the fetch failed and a fallback
//! quote takes its place. The error variants exist only so the diagnostic
//! log line can say what actually happened.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::ApiConfig;
use crate::quotes::Quote;

/// Why a fetch failed. Logged, never surfaced to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("quote API returned HTTP {0}")]
    Status(StatusCode),

    #[error("quote request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the quote endpoint.
///
/// Cheap to clone; each fetch cycle clones the fetcher into its task.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: Client,
    url: String,
}

impl QuoteFetcher {
    /// Build the client from config. Timeouts are only applied when
    /// configured; by default the transport's own limits are the only ones.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// GET the endpoint and parse the body as a single quote object.
    ///
    /// `content` and `author` must both be present; unknown fields are
    /// ignored. A non-success status is an error even if the body parses.
    pub async fn fetch_quote(&self) -> Result<Quote, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let quote = response.json::<Quote>().await?;
        Ok(quote)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
