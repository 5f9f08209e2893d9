//! Geocoding client and address resolution.
//!
//! Two layers: [`GeocodeClient`] speaks the HTTP API, and
//! [`AddressResolver`] wraps any [`Geocoder`] with query building and the
//! quota retry protocol.
//!
//! Key characteristics of the service:
//! - Errors arrive in-band: HTTP 200 with a non-"OK" `status` field
//! - Quota exhaustion is the `OVER_QUERY_LIMIT` status and is worth
//!   retrying after a delay; every other failure is final for that query

mod client;
mod error;
mod resolver;
mod types;

pub use client::{GeocodeClient, Geocoder, GeocoderConfig};
pub use error::GeocodeError;
pub use resolver::{AddressResolver, RetryConfig, geocode_query};
pub use types::{
    GeocodeResponse, GeocodeResult, Geometry, Location, STATUS_OK, STATUS_OVER_QUERY_LIMIT,
};
