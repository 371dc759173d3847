//! Core error types for kazrpg-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! validation failures in the domain record constructors.

use thiserror::Error;

/// Core errors produced by the kazrpg-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A review rating outside the 1..=5 range.
    #[error("invalid rating: {rating} (must be 1..=5)")]
    InvalidRating { rating: u8 },
}
