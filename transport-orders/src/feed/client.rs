//! Order feed HTTP client.

use tracing::debug;

use crate::countries::CountryCodes;
use crate::domain::Order;

use super::convert::convert_feed_body;
use super::error::FeedError;

/// Default URL for the order feed.
const DEFAULT_FEED_URL: &str = "http://mobapply.com/tests/orders/";

/// Configuration for the order feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL serving the order feed
    pub feed_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom feed URL (for testing).
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the order feed.
///
/// Owns the country code lookup so every parsed address arrives with its
/// two-letter code already derived.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    feed_url: String,
    countries: CountryCodes,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            feed_url: config.feed_url,
            countries: CountryCodes::new(),
        })
    }

    /// Fetch the current order list.
    ///
    /// One GET against the feed URL. Records that fail to parse are skipped;
    /// the rest come back in feed order.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, FeedError> {
        debug!(url = %self.feed_url, "fetching order feed");

        let response = self.http.get(&self.feed_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let orders = convert_feed_body(&body, &self.countries)?;

        debug!(count = orders.len(), "parsed order feed");

        Ok(orders)
    }
}
