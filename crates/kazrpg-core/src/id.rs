//! Record identifiers.
//!
//! [`RecordId`] is a newtype over `String` so a record ID cannot be confused
//! with any other string field. Generated IDs concatenate the base-36
//! encoding of the current Unix-epoch milliseconds with a base-36 encoding
//! of a random `u64`, which keeps them roughly time-sortable while making
//! collisions within a process vanishingly unlikely. The store still checks
//! for collisions at insert time.
//!
//! A default-constructed ID is empty and means "not yet assigned" -- the
//! store generates a real ID when such a record is inserted.

use std::fmt;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// String identifier for a stored record, unique within its collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    /// Generates a fresh identifier: base-36 epoch milliseconds followed by
    /// a base-36 random fragment.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u128;
        let noise: u64 = rand::thread_rng().gen();
        RecordId(format!("{}{}", to_base36(millis), to_base36(noise as u128)))
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if this ID is the empty placeholder and the store should
    /// generate one at insert time.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

/// Lowercase base-36 rendering of `n`.
fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.iter().rev().map(|&b| b as char).collect()
}
