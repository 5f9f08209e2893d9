//! Transportation orders.

use super::address::Address;

/// A transportation request: something moves from a departure address to a
/// destination address.
///
/// The two addresses are fixed at construction; the pipeline only fills in
/// their coordinate pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub departure: Address,
    pub destination: Address,
}

impl Order {
    /// Create an order from its two addresses.
    pub fn new(departure: Address, destination: Address) -> Self {
        Self {
            departure,
            destination,
        }
    }

    /// Whether both addresses carry resolved coordinates.
    pub fn has_coordinates(&self) -> bool {
        self.departure.has_coordinates() && self.destination.has_coordinates()
    }
}
