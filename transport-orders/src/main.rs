use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use transport_orders::domain::Address;
use transport_orders::feed::{FeedClient, FeedConfig};
use transport_orders::geocode::{AddressResolver, GeocodeClient, GeocoderConfig};
use transport_orders::pipeline::Pipeline;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("transport_orders=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let mut feed_config = FeedConfig::new();
    if let Ok(url) = std::env::var("ORDER_FEED_URL") {
        feed_config = feed_config.with_feed_url(url);
    }

    let mut geocoder_config = GeocoderConfig::new();
    if let Ok(url) = std::env::var("GEOCODE_BASE_URL") {
        geocoder_config = geocoder_config.with_base_url(url);
    }
    if let Ok(key) = std::env::var("GEOCODE_API_KEY") {
        geocoder_config = geocoder_config.with_api_key(key);
    }

    let feed = FeedClient::new(feed_config).expect("Failed to create feed client");
    let geocoder = GeocodeClient::new(geocoder_config).expect("Failed to create geocoding client");
    let pipeline = Pipeline::new(feed, AddressResolver::new(geocoder));

    let orders = pipeline.run().await;

    for (index, order) in orders.iter().enumerate() {
        println!("Order {}:", index + 1);
        print_address("from", &order.departure);
        print_address("to", &order.destination);
    }

    let resolved = orders.iter().filter(|o| o.has_coordinates()).count();
    println!();
    println!("{} orders, {} fully resolved", orders.len(), resolved);
}

fn print_address(role: &str, address: &Address) {
    match address.coordinates() {
        Some(coordinates) => println!("  {:4} {} ({})", role, address.label(), coordinates),
        None => println!("  {:4} {} (unresolved)", role, address.label()),
    }
}
