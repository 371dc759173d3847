//! The fixed set of collection names.
//!
//! The store file's top-level object holds exactly these five keys. The enum
//! exists so collection names are checked at compile time instead of passed
//! around as strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of one of the five marketplace collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionName {
    Users,
    Games,
    Bookings,
    Reviews,
    Messages,
}

impl CollectionName {
    /// All collection names, in store-file key order.
    pub const ALL: [CollectionName; 5] = [
        CollectionName::Users,
        CollectionName::Games,
        CollectionName::Bookings,
        CollectionName::Reviews,
        CollectionName::Messages,
    ];

    /// The collection's key in the store file.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Users => "users",
            CollectionName::Games => "games",
            CollectionName::Bookings => "bookings",
            CollectionName::Reviews => "reviews",
            CollectionName::Messages => "messages",
        }
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_are_distinct() {
        for (i, a) in CollectionName::ALL.iter().enumerate() {
            for b in &CollectionName::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn serde_uses_store_file_keys() {
        for name in CollectionName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }
}
