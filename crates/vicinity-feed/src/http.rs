//! HTTP adapter for the marketplace's provider read endpoint.
//!
//! Wraps `reqwest` with typed status handling and retry. The endpoint
//! contract is `GET {base}/providers`, optionally narrowed with a
//! `category` query parameter. Responses are decoded leniently by
//! [`crate::wire`].

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use vicinity_core::ProviderRecord;

use crate::error::FeedError;
use crate::feed::{CategoryFilter, ProviderFeed};
use crate::retry::retry_with_backoff;
use crate::wire;

/// HTTP client for a provider directory.
///
/// Handles not-found (404) and other non-2xx responses as typed errors.
/// Transient errors (network failures, 5xx) are automatically retried with
/// exponential backoff up to `max_retries` additional attempts. Use the
/// base URL parameter to point the client at a mock server in tests.
pub struct HttpProviderFeed {
    client: Client,
    base_url: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in milliseconds for exponential backoff.
    backoff_base_ms: u64,
}

impl HttpProviderFeed {
    /// Creates a feed client for the directory at `base_url`.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors. Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_retries,
            backoff_base_ms,
        })
    }

    /// Builds the request URL, percent-encoding the category slug.
    fn providers_url(&self, filter: &CategoryFilter) -> String {
        match filter {
            CategoryFilter::All => format!("{}/providers", self.base_url),
            CategoryFilter::Category(slug) => {
                let encoded = utf8_percent_encode(slug, NON_ALPHANUMERIC);
                format!("{}/providers?category={encoded}", self.base_url)
            }
        }
    }
}

#[async_trait]
impl ProviderFeed for HttpProviderFeed {
    /// Fetches one record set from the directory, with automatic retry on
    /// transient errors.
    ///
    /// # Errors
    ///
    /// - [`FeedError::NotFound`]: HTTP 404 (not retried).
    /// - [`FeedError::UnexpectedStatus`]: any other non-2xx status (5xx
    ///   retried, 4xx not).
    /// - [`FeedError::Http`]: network or TLS failure after all retries.
    /// - [`FeedError::Deserialize`]: body is not a providers document
    ///   (not retried).
    async fn fetch(&self, filter: &CategoryFilter) -> Result<Vec<ProviderRecord>, FeedError> {
        let url = self.providers_url(filter);

        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(FeedError::NotFound { url });
                }
                if !status.is_success() {
                    return Err(FeedError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                wire::decode_providers(&body, &url)
            }
        })
        .await
    }
}
