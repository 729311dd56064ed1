//! Product identifier newtype.
//!
//! Wrapping the raw string in a newtype keeps product ids from being mixed
//! up with other string-typed fields (names, image paths) at compile time.

use serde::{Deserialize, Serialize};

/// Identifier for a distinct product.
///
/// Ids are opaque strings. Product cards that do not carry a real id get a
/// synthetic one minted from a millisecond timestamp, so the string form
/// covers both "real" and synthetic ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from a raw string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a synthetic id from a millisecond timestamp.
    ///
    /// Used when a product card carries no data id. Two clicks within the
    /// same millisecond mint the same id; callers accept that collision.
    #[must_use]
    pub fn synthetic(timestamp_millis: i64) -> Self {
        Self(timestamp_millis.to_string())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_is_transparent() {
        let id = ProductId::new("widget-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"widget-1\"");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn synthetic_id_is_decimal_string() {
        let id = ProductId::synthetic(1_700_000_000_123);
        assert_eq!(id.as_str(), "1700000000123");
    }
}
