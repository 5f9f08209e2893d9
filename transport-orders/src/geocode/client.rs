//! Geocoding HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use super::error::GeocodeError;
use super::types::GeocodeResponse;

/// Default base URL for the geocoding API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode";

/// Default maximum concurrent requests.
///
/// The keyless quota is tight, so one request in flight at a time is the
/// default.
const DEFAULT_MAX_CONCURRENT: usize = 1;

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API (defaults to the production service)
    pub base_url: String,
    /// Optional API key, sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Create a config with keyless defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend that answers a geocoding query.
///
/// This abstraction lets the resolver's retry protocol run against scripted
/// response sequences in tests.
#[async_trait]
pub trait Geocoder {
    /// Geocode a free-form address query.
    ///
    /// Returns the raw response; interpreting its `status` (including the
    /// quota sentinel) is the caller's job.
    async fn geocode(&self, query: &str) -> Result<GeocodeResponse, GeocodeError>;
}

/// HTTP client for the geocoding API.
///
/// Uses a semaphore to bound in-flight requests; quota exhaustion still
/// arrives in-band as an `OVER_QUERY_LIMIT` status and is handled by the
/// resolver, not here.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    semaphore: Arc<Semaphore>,
}

impl GeocodeClient {
    /// Create a new geocoding client with the given configuration.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn geocode(&self, query: &str) -> Result<GeocodeResponse, GeocodeError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/json", self.base_url);

        let mut request = self.http.get(&url).query(&[("address", query)]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
