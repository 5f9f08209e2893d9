//! Address resolution.
//!
//! Builds the free-form query for an address and runs it through a
//! [`Geocoder`] with a bounded retry protocol for quota exhaustion. Toward
//! the pipeline a resolution either yields coordinates or it doesn't;
//! failure detail goes to the log.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, error, warn};

use crate::domain::{Address, Coordinates};

use super::client::Geocoder;
use super::error::GeocodeError;
use super::types::{STATUS_OK, STATUS_OVER_QUERY_LIMIT};

/// Build the free-form geocoding query for an address.
///
/// Joins the non-empty components in fixed order: house number, street,
/// city, postal code, two-letter country code. No component, no query.
pub fn geocode_query(address: &Address) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(5);

    for part in [
        address.house_number.as_str(),
        address.street.as_str(),
        address.city.as_str(),
        address.zip_code.as_str(),
    ] {
        if !part.is_empty() {
            parts.push(part);
        }
    }

    if let Some(code) = &address.country_code_alpha2 {
        parts.push(code.as_str());
    }

    parts.join(",")
}

/// Retry behavior for quota-limited requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
    /// Delay in milliseconds before the first retry
    pub base_delay_ms: u64,
    /// Cap on the exponentially growing delay
    pub max_delay_ms: u64,
    /// Jitter factor (0.0-1.0) randomizing each delay
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay_ms: 200,
            max_delay_ms: 5_000,
            jitter_factor: 0.2,
        }
    }
}

impl RetryConfig {
    /// Delay before the retry that follows the given 1-based attempt:
    /// exponential from `base_delay_ms`, capped at `max_delay_ms`, with
    /// ±`jitter_factor` spread.
    fn delay_for(&self, attempt: u32) -> u64 {
        let exponential = self
            .base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = exponential.min(self.max_delay_ms);

        let jitter_range = (capped as f64 * self.jitter_factor) as i64;
        if jitter_range > 0 {
            let jitter = rand::thread_rng().gen_range(-jitter_range..=jitter_range);
            (capped as i64 + jitter).max(0) as u64
        } else {
            capped
        }
    }
}

/// Resolves addresses to coordinates through a [`Geocoder`] backend.
#[derive(Debug, Clone)]
pub struct AddressResolver<G> {
    geocoder: G,
    retry: RetryConfig,
}

impl<G: Geocoder> AddressResolver<G> {
    /// Create a resolver with default retry behavior.
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            retry: RetryConfig::default(),
        }
    }

    /// Replace the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Resolve an address to a coordinate pair.
    ///
    /// Never fails visibly: whatever goes wrong is logged and the address
    /// is simply left unresolved. Resolving the same address again asks the
    /// backend again; nothing is cached.
    pub async fn resolve(&self, address: &Address) -> Option<Coordinates> {
        let query = geocode_query(address);
        if query.is_empty() {
            warn!("address has no usable fields, skipping geocoding");
            return None;
        }

        debug!(query = %query, "geocoding address");
        match self.try_resolve(&query).await {
            Ok(found) => found,
            Err(e @ GeocodeError::RateLimited { .. }) => {
                error!(query = %query, error = %e, "geocoding quota exhausted, giving up");
                None
            }
            Err(e @ GeocodeError::Http(_)) => {
                warn!(query = %query, error = %e, "geocoding request failed");
                None
            }
            Err(e @ GeocodeError::Api { .. }) => {
                warn!(query = %query, error = %e, "geocoding service rejected the request");
                None
            }
            Err(e @ GeocodeError::Json { .. }) => {
                warn!(query = %query, error = %e, "geocoding response was unreadable");
                None
            }
        }
    }

    /// Run a query through the quota retry protocol.
    ///
    /// Repeats the identical request while the service answers
    /// `OVER_QUERY_LIMIT`, sleeping the backoff delay in between, up to the
    /// retry ceiling. `Ok(None)` means the service answered but had no
    /// usable match.
    async fn try_resolve(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let response = self.geocoder.geocode(query).await?;

            if response.status == STATUS_OVER_QUERY_LIMIT {
                if attempts > self.retry.max_retries {
                    return Err(GeocodeError::RateLimited { attempts });
                }

                let delay = self.retry.delay_for(attempts);
                warn!(
                    attempt = attempts,
                    max_retries = self.retry.max_retries,
                    delay_ms = delay,
                    "geocoding quota exhausted, backing off"
                );
                tokio::time::sleep(Duration::from_millis(delay)).await;
                continue;
            }

            if response.status != STATUS_OK {
                warn!(
                    status = %response.status,
                    error_message = response.error_message.as_deref().unwrap_or_default(),
                    "geocoding returned no result"
                );
                return Ok(None);
            }

            let Some(first) = response.results.first() else {
                debug!("geocoding returned OK without results");
                return Ok(None);
            };

            let location = &first.geometry.location;
            return Ok(Some(Coordinates {
                latitude: location.lat,
                longitude: location.lng,
            }));
        }
    }
}
