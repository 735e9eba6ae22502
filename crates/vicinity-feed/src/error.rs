use thiserror::Error;

/// Errors returned by provider feed adapters.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory has no resource at the requested URL (HTTP 404).
    #[error("feed endpoint not found: {url}")]
    NotFound { url: String },

    /// Any other non-2xx HTTP status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
