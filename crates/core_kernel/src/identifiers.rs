//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers prevents accidental mixing of identifier types.
//! Platform-local identifiers (orders, buyers, activity entries) are numeric
//! because the host commerce platform hands them out as integers; identifiers
//! minted by the external accounting service are opaque strings.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_numeric_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw platform value
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying numeric value
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

macro_rules! define_external_id {
    ($name:ident) => {
        /// Opaque identifier assigned by the external accounting service
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

// Platform-local identifiers
define_numeric_id!(OrderId);
define_numeric_id!(BuyerId);
define_numeric_id!(EntryId);

// External accounting-service identifiers
define_external_id!(ContactId);
define_external_id!(InvoiceId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_display() {
        let id = OrderId::new(1001);
        assert_eq!(id.to_string(), "1001");
        assert_eq!(id.value(), 1001);
    }

    #[test]
    fn test_numeric_id_conversion() {
        let buyer: BuyerId = 42.into();
        let raw: i64 = buyer.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_external_id_roundtrip() {
        let contact = ContactId::new("cnt_8f3a");
        assert_eq!(contact.as_str(), "cnt_8f3a");
        assert_eq!(contact, ContactId::from("cnt_8f3a"));
    }

    #[test]
    fn test_serde_transparent() {
        let order = OrderId::new(7);
        assert_eq!(serde_json::to_string(&order).unwrap(), "7");

        let invoice = InvoiceId::new("inv_1");
        assert_eq!(serde_json::to_string(&invoice).unwrap(), "\"inv_1\"");
    }
}
