//! Core domain types.

mod address;
mod order;

pub use address::{Address, Coordinates};
pub use order::Order;
