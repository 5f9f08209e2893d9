//! Order feed response DTOs.
//!
//! These types map directly to the JSON records served by the order feed.
//! Every field is required; a record missing one is rejected as a whole.

use serde::Deserialize;

/// A single order record from the feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub departure_address: AddressRecord,
    pub destination_address: AddressRecord,
}

/// An address as it appears in an order record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub country: String,
    pub zip_code: String,
    pub city: String,
    /// Three-letter country code.
    pub country_code: String,
    pub street: String,
    pub house_number: String,
}
