//! Order feed client.
//!
//! The feed serves a JSON array of order records, each with a departure and
//! destination address keyed by three-letter country codes. Parsing is
//! record-granular: one bad record is skipped, the rest of the batch
//! survives.

mod client;
mod convert;
mod error;
mod types;

pub use client::{FeedClient, FeedConfig};
pub use convert::convert_feed_body;
pub use error::FeedError;
pub use types::{AddressRecord, OrderRecord};
