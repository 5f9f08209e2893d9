//! Transportation order ingestion and geocoding.
//!
//! Fetches transportation orders from a remote feed, translates their
//! three-letter country codes, and resolves each postal address to a
//! coordinate pair through an external geocoding service. The enriched
//! order list is ready for display on a map.

pub mod countries;
pub mod domain;
pub mod feed;
pub mod geocode;
pub mod pipeline;
