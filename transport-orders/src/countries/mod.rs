//! ISO 3166-1 country code translation.
//!
//! The order feed identifies countries by alpha-3 code ("DEU"), while the
//! geocoding service wants alpha-2 ("DE"). This module carries the
//! assignment table and the lookup built from it.

mod table;

use std::collections::HashMap;
use std::fmt;

/// Error returned when parsing an invalid alpha-2 code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid alpha-2 country code: {reason}")]
pub struct InvalidAlpha2 {
    reason: &'static str,
}

/// Error returned when parsing an invalid alpha-3 code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid alpha-3 country code: {reason}")]
pub struct InvalidAlpha3 {
    reason: &'static str,
}

/// A valid ISO 3166-1 alpha-2 country code.
///
/// Alpha-2 codes are always 2 uppercase ASCII letters. This type guarantees
/// that any `Alpha2` value is well-formed by construction (though not that
/// it is an assigned code).
///
/// # Examples
///
/// ```
/// use transport_orders::countries::Alpha2;
///
/// let de = Alpha2::parse("DE").unwrap();
/// assert_eq!(de.as_str(), "DE");
///
/// // Lowercase is rejected
/// assert!(Alpha2::parse("de").is_err());
///
/// // Wrong length is rejected
/// assert!(Alpha2::parse("D").is_err());
/// assert!(Alpha2::parse("DEU").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alpha2([u8; 2]);

impl Alpha2 {
    /// Parse an alpha-2 code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAlpha2> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidAlpha2 {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAlpha2 {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Alpha2([bytes[0], bytes[1]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Alpha2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alpha2({})", self.as_str())
    }
}

impl fmt::Display for Alpha2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A valid ISO 3166-1 alpha-3 country code.
///
/// Alpha-3 codes are always 3 uppercase ASCII letters, well-formed by
/// construction like [`Alpha2`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alpha3([u8; 3]);

impl Alpha3 {
    /// Parse an alpha-3 code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAlpha3> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAlpha3 {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAlpha3 {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Alpha3([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Alpha3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alpha3({})", self.as_str())
    }
}

impl fmt::Display for Alpha3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alpha-3 to alpha-2 lookup over the ISO 3166-1 assignments.
///
/// Built once per feed client and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CountryCodes {
    codes: HashMap<Alpha3, Alpha2>,
}

impl CountryCodes {
    /// Build the lookup from the compiled-in assignment table.
    pub fn new() -> Self {
        let codes = table::ISO_3166
            .iter()
            .filter_map(|(alpha3, alpha2)| {
                let alpha3 = Alpha3::parse(alpha3).ok()?;
                let alpha2 = Alpha2::parse(alpha2).ok()?;
                Some((alpha3, alpha2))
            })
            .collect();

        Self { codes }
    }

    /// Translate a three-letter code to its two-letter equivalent.
    ///
    /// Lookup is case-insensitive. Codes without an assignment (unknown,
    /// malformed, user-assigned) return `None`.
    pub fn translate(&self, alpha3: &str) -> Option<Alpha2> {
        let alpha3 = Alpha3::parse(&alpha3.to_uppercase()).ok()?;
        self.codes.get(&alpha3).copied()
    }

    /// Returns the number of assignments in the lookup.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the lookup has no assignments.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CountryCodes {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_alpha3_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{3}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn alpha3_roundtrip(s in valid_alpha3_string()) {
            let code = Alpha3::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any 2 uppercase letters parse as alpha-2
        #[test]
        fn alpha2_valid_always_parses(s in "[A-Z]{2}") {
            prop_assert!(Alpha2::parse(&s).is_ok());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn alpha3_lowercase_rejected(s in "[a-z]{3}") {
            prop_assert!(Alpha3::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn alpha3_wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(Alpha3::parse(&s).is_err());
        }

        /// Translation of any well-formed code never panics and, when it
        /// yields a value, that value is a 2-letter code
        #[test]
        fn translate_total(s in "[A-Za-z]{3}") {
            let codes = CountryCodes::new();
            if let Some(alpha2) = codes.translate(&s) {
                prop_assert_eq!(alpha2.as_str().len(), 2);
            }
        }
    }
}
