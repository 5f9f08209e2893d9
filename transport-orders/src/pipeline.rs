//! Order enrichment pipeline.
//!
//! Fetches the order feed once, then walks the orders resolving departure
//! and destination addresses one at a time, in feed order. The run always
//! hands back the full order list; unresolved addresses just stay without
//! coordinates.

use tracing::{error, info};

use crate::domain::Order;
use crate::feed::FeedClient;
use crate::geocode::{AddressResolver, Geocoder};

/// One-shot pipeline: fetch orders, geocode their addresses.
pub struct Pipeline<G> {
    feed: FeedClient,
    resolver: AddressResolver<G>,
}

impl<G: Geocoder> Pipeline<G> {
    /// Create a pipeline from its two collaborators.
    pub fn new(feed: FeedClient, resolver: AddressResolver<G>) -> Self {
        Self { feed, resolver }
    }

    /// Run the pipeline to completion.
    ///
    /// A feed failure is logged and yields an empty list. Resolution is
    /// strictly sequential: one address at a time, departure before
    /// destination, orders in feed order.
    pub async fn run(&self) -> Vec<Order> {
        let mut orders = match self.feed.fetch_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                error!(error = %e, "failed to fetch order feed");
                return Vec::new();
            }
        };

        info!(count = orders.len(), "fetched orders, resolving addresses");

        for order in &mut orders {
            if let Some(coordinates) = self.resolver.resolve(&order.departure).await {
                order.departure.set_coordinates(coordinates);
            }
            if let Some(coordinates) = self.resolver.resolve(&order.destination).await {
                order.destination.set_coordinates(coordinates);
            }
        }

        let resolved = orders.iter().filter(|o| o.has_coordinates()).count();
        info!(total = orders.len(), resolved, "pipeline run complete");

        orders
    }
}
