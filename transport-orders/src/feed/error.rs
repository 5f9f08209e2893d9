//! Order feed error types.

/// Errors that can occur when fetching the order feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status
    #[error("feed error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a JSON array
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
