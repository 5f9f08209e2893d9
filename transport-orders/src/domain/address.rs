//! Postal addresses and coordinates.

use std::fmt;

use crate::countries::{Alpha2, CountryCodes};

/// A geographic coordinate pair.
///
/// Exists only as a whole: an address either has both latitude and
/// longitude or neither.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// A structured postal address from the order feed.
///
/// The six feed fields are kept exactly as received. The two-letter country
/// code is derived from the three-letter one at construction; feeds using a
/// code outside the ISO assignments leave it `None`. Coordinates start
/// absent and are attached by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    /// Country display name.
    pub country: String,
    /// Postal code.
    pub zip_code: String,
    /// City or town name.
    pub city: String,
    /// Three-letter country code, exactly as the feed sent it.
    pub country_code: String,
    /// Street name.
    pub street: String,
    /// House number (free-form, may include suffixes like "12a").
    pub house_number: String,
    /// Two-letter equivalent of `country_code`, when assigned.
    pub country_code_alpha2: Option<Alpha2>,
    coordinates: Option<Coordinates>,
}

impl Address {
    /// Create an address from feed fields, deriving the two-letter code.
    ///
    /// Field order matches the feed record: country, postal code, city,
    /// three-letter country code, street, house number.
    pub fn new(
        country: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
        country_code: impl Into<String>,
        street: impl Into<String>,
        house_number: impl Into<String>,
        countries: &CountryCodes,
    ) -> Self {
        let country_code = country_code.into();
        let country_code_alpha2 = countries.translate(&country_code);

        Self {
            country: country.into(),
            zip_code: zip_code.into(),
            city: city.into(),
            country_code,
            street: street.into(),
            house_number: house_number.into(),
            country_code_alpha2,
            coordinates: None,
        }
    }

    /// Attach the resolved coordinate pair.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
    }

    /// The resolved coordinate pair, if any.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Whether this address has been resolved to coordinates.
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Single-line display form: house number, street, city, postal code
    /// and three-letter country code, space-separated. Empty fields are
    /// skipped.
    pub fn label(&self) -> String {
        let parts = [
            self.house_number.as_str(),
            self.street.as_str(),
            self.city.as_str(),
            self.zip_code.as_str(),
            self.country_code.as_str(),
        ];

        parts
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berlin(countries: &CountryCodes) -> Address {
        Address::new(
            "Germany",
            "10117",
            "Berlin",
            "DEU",
            "Chausseestr.",
            "101",
            countries,
        )
    }

    #[test]
    fn new_derives_alpha2() {
        let countries = CountryCodes::new();
        let address = berlin(&countries);

        assert_eq!(address.country_code, "DEU");
        assert_eq!(address.country_code_alpha2.unwrap().as_str(), "DE");
    }

    #[test]
    fn new_with_unknown_country_code() {
        let countries = CountryCodes::new();
        let address = Address::new("Nowhere", "1", "Town", "XXX", "Road", "2", &countries);

        assert_eq!(address.country_code, "XXX");
        assert_eq!(address.country_code_alpha2, None);
    }

    #[test]
    fn coordinates_start_absent() {
        let countries = CountryCodes::new();
        let address = berlin(&countries);

        assert!(!address.has_coordinates());
        assert_eq!(address.coordinates(), None);
    }

    #[test]
    fn set_coordinates() {
        let countries = CountryCodes::new();
        let mut address = berlin(&countries);

        address.set_coordinates(Coordinates {
            latitude: 52.5283,
            longitude: 13.3845,
        });

        assert!(address.has_coordinates());
        let coordinates = address.coordinates().unwrap();
        assert_eq!(coordinates.latitude, 52.5283);
        assert_eq!(coordinates.longitude, 13.3845);
    }

    #[test]
    fn label_joins_fields() {
        let countries = CountryCodes::new();
        let address = berlin(&countries);

        assert_eq!(address.label(), "101 Chausseestr. Berlin 10117 DEU");
    }

    #[test]
    fn label_skips_empty_fields() {
        let countries = CountryCodes::new();
        let address = Address::new("Germany", "", "Berlin", "DEU", "Chausseestr.", "", &countries);

        assert_eq!(address.label(), "Chausseestr. Berlin DEU");
    }

    #[test]
    fn display_matches_label() {
        let countries = CountryCodes::new();
        let address = berlin(&countries);

        assert_eq!(format!("{}", address), address.label());
    }

    #[test]
    fn coordinates_display() {
        let coordinates = Coordinates {
            latitude: 52.5283,
            longitude: 13.3845,
        };

        assert_eq!(format!("{}", coordinates), "52.5283, 13.3845");
    }
}
