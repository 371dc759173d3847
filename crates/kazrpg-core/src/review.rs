//! Player reviews of games.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::RecordId;

/// A player's review of a game, rated 1..=5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Review {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: RecordId,
    pub game_id: RecordId,
    pub author_id: RecordId,
    /// Star rating, 1..=5.
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Creates an unassigned review ready for insertion.
    ///
    /// Returns [`CoreError::InvalidRating`] for ratings outside 1..=5.
    pub fn new(game_id: RecordId, author_id: RecordId, rating: u8) -> Result<Self, CoreError> {
        if !(1..=5).contains(&rating) {
            return Err(CoreError::InvalidRating { rating });
        }
        let now = Utc::now();
        Ok(Review {
            id: RecordId::default(),
            game_id,
            author_id,
            rating,
            comment: None,
            created_at: now,
            updated_at: now,
        })
    }
}
