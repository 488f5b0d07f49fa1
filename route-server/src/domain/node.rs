//! Stop code and stop types.

use std::fmt;

use super::DomainError;

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidNodeCode {
    reason: &'static str,
}

/// A valid stop code: 1-8 uppercase ASCII letters or digits.
///
/// Stop codes key every lookup in the graph, so this type guarantees
/// that any `NodeCode` value is well-formed by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::NodeCode;
///
/// let hub = NodeCode::parse("HYB").unwrap();
/// assert_eq!(hub.as_str(), "HYB");
///
/// // Lowercase is rejected
/// assert!(NodeCode::parse("hyb").is_err());
///
/// // But can be normalized first
/// assert!(NodeCode::parse_normalized(" hyb ").is_ok());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeCode(String);

impl NodeCode {
    /// Parse a stop code from a string.
    ///
    /// The input must be 1-8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidNodeCode> {
        if s.is_empty() {
            return Err(InvalidNodeCode {
                reason: "must not be empty",
            });
        }

        if s.len() > 8 {
            return Err(InvalidNodeCode {
                reason: "must be at most 8 characters",
            });
        }

        for b in s.bytes() {
            if !b.is_ascii_uppercase() && !b.is_ascii_digit() {
                return Err(InvalidNodeCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(NodeCode(s.to_string()))
    }

    /// Parse a stop code, trimming whitespace and uppercasing first.
    ///
    /// Useful for user-supplied input from query parameters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidNodeCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeCode({})", self.0)
    }
}

impl fmt::Display for NodeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop in the transit network: a code, a display name, and a
/// geographic position.
///
/// Immutable once constructed; owned by the graph store.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique stop code.
    pub code: NodeCode,

    /// Human-readable stop name.
    pub name: String,

    /// Latitude in degrees, in [-90, 90].
    pub lat: f64,

    /// Longitude in degrees, in [-180, 180].
    pub lon: f64,
}

impl Node {
    /// Create a new stop, validating the coordinates.
    pub fn new(
        code: NodeCode,
        name: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidLongitude(lon));
        }

        Ok(Self {
            code,
            name: name.into(),
            lat,
            lon,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z0-9]{1,8}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_code_string()) {
            let code = NodeCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Normalizing an already-valid code is the identity
        #[test]
        fn normalize_is_identity_on_valid(s in valid_code_string()) {
            let a = NodeCode::parse(&s).unwrap();
            let b = NodeCode::parse_normalized(&s).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Lowercase letters are always rejected by strict parse
        #[test]
        fn lowercase_rejected(s in "[a-z]{1,8}") {
            prop_assert!(NodeCode::parse(&s).is_err());
        }

        /// Over-long strings are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Z0-9]{9,16}") {
            prop_assert!(NodeCode::parse(&s).is_err());
        }
    }
}
