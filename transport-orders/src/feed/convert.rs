//! Conversion from feed records to domain orders.

use tracing::warn;

use crate::countries::CountryCodes;
use crate::domain::{Address, Order};

use super::error::FeedError;
use super::types::{AddressRecord, OrderRecord};

/// Convert a feed body into orders.
///
/// The body must be a JSON array. Each element is deserialized on its own,
/// so a malformed record costs only itself, not the whole batch; skipped
/// records are logged. Order is preserved.
pub fn convert_feed_body(body: &str, countries: &CountryCodes) -> Result<Vec<Order>, FeedError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FeedError::Json {
            message: e.to_string(),
        })?;

    let mut orders = Vec::with_capacity(records.len());

    for (index, value) in records.into_iter().enumerate() {
        match serde_json::from_value::<OrderRecord>(value) {
            Ok(record) => orders.push(convert_record(record, countries)),
            Err(e) => {
                warn!(record = index, error = %e, "skipping malformed order record");
            }
        }
    }

    Ok(orders)
}

fn convert_record(record: OrderRecord, countries: &CountryCodes) -> Order {
    Order::new(
        convert_address(record.departure_address, countries),
        convert_address(record.destination_address, countries),
    )
}

fn convert_address(record: AddressRecord, countries: &CountryCodes) -> Address {
    Address::new(
        record.country,
        record.zip_code,
        record.city,
        record.country_code,
        record.street,
        record.house_number,
        countries,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(city: &str, code: &str) -> String {
        format!(
            r#"{{
                "departureAddress": {{
                    "country": "Germany",
                    "zipCode": "10117",
                    "city": "{city}",
                    "countryCode": "{code}",
                    "street": "Chausseestr.",
                    "houseNumber": "101"
                }},
                "destinationAddress": {{
                    "country": "France",
                    "zipCode": "75001",
                    "city": "Paris",
                    "countryCode": "FRA",
                    "street": "Rue de Rivoli",
                    "houseNumber": "12"
                }}
            }}"#
        )
    }

    #[test]
    fn converts_all_valid_records() {
        let countries = CountryCodes::new();
        let body = format!("[{},{}]", record_json("Berlin", "DEU"), record_json("Hamburg", "DEU"));

        let orders = convert_feed_body(&body, &countries).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].departure.city, "Berlin");
        assert_eq!(orders[1].departure.city, "Hamburg");
    }

    #[test]
    fn fields_survive_conversion_exactly() {
        let countries = CountryCodes::new();
        let body = format!("[{}]", record_json("Berlin", "DEU"));

        let orders = convert_feed_body(&body, &countries).unwrap();
        let departure = &orders[0].departure;

        assert_eq!(departure.country, "Germany");
        assert_eq!(departure.zip_code, "10117");
        assert_eq!(departure.city, "Berlin");
        assert_eq!(departure.country_code, "DEU");
        assert_eq!(departure.street, "Chausseestr.");
        assert_eq!(departure.house_number, "101");
        assert_eq!(departure.country_code_alpha2.unwrap().as_str(), "DE");
        assert!(!departure.has_coordinates());

        let destination = &orders[0].destination;
        assert_eq!(destination.city, "Paris");
        assert_eq!(destination.country_code_alpha2.unwrap().as_str(), "FR");
    }

    #[test]
    fn skips_malformed_records() {
        let countries = CountryCodes::new();
        // Middle record is missing its destination address entirely.
        let body = format!(
            r#"[{},{{"departureAddress":{{"country":"X"}}}},{}]"#,
            record_json("Berlin", "DEU"),
            record_json("Hamburg", "DEU")
        );

        let orders = convert_feed_body(&body, &countries).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].departure.city, "Berlin");
        assert_eq!(orders[1].departure.city, "Hamburg");
    }

    #[test]
    fn unknown_country_code_is_kept_without_alpha2() {
        let countries = CountryCodes::new();
        let body = format!("[{}]", record_json("Berlin", "XYZ"));

        let orders = convert_feed_body(&body, &countries).unwrap();

        assert_eq!(orders[0].departure.country_code, "XYZ");
        assert_eq!(orders[0].departure.country_code_alpha2, None);
    }

    #[test]
    fn empty_array_is_no_orders() {
        let countries = CountryCodes::new();
        let orders = convert_feed_body("[]", &countries).unwrap();
        assert!(orders.is_empty());
    }

    #[test]
    fn non_array_body_is_an_error() {
        let countries = CountryCodes::new();

        assert!(matches!(
            convert_feed_body(r#"{"orders": []}"#, &countries),
            Err(FeedError::Json { .. })
        ));
        assert!(matches!(
            convert_feed_body("not json", &countries),
            Err(FeedError::Json { .. })
        ));
    }
}
