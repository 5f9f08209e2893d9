//! Geocoding API response DTOs.
//!
//! The service reports errors in-band: the HTTP status is 200 even when the
//! lookup failed, and the `status` field says what happened.

use serde::Deserialize;

/// Status value for a successful lookup.
pub const STATUS_OK: &str = "OK";

/// Status value reporting an exhausted request quota.
pub const STATUS_OVER_QUERY_LIMIT: &str = "OVER_QUERY_LIMIT";

/// Top-level geocoding response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Outcome of the lookup, e.g. "OK", "ZERO_RESULTS", "OVER_QUERY_LIMIT".
    pub status: String,

    /// Candidate matches, best first. Omitted on most error statuses.
    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Human-readable detail accompanying some error statuses.
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A single geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Location,
}

/// A geographic point as the service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}
