//! Game listings hosted by Game Masters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// A bookable game listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Game {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: RecordId,
    /// Listing title shown in search results.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Rule system, e.g. "D&D 5e" or "Call of Cthulhu".
    pub system: String,
    /// The hosting Game Master's user record.
    pub gm_id: RecordId,
    /// Price per seat, in cents.
    pub price_cents: u32,
    /// Seats available per session.
    pub max_players: u32,
    /// Free-form search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Creates an unassigned game listing ready for insertion.
    pub fn new(
        title: impl Into<String>,
        system: impl Into<String>,
        gm_id: RecordId,
        price_cents: u32,
        max_players: u32,
    ) -> Self {
        let now = Utc::now();
        Game {
            id: RecordId::default(),
            title: title.into(),
            description: String::new(),
            system: system.into(),
            gm_id,
            price_cents,
            max_players,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// `true` for listings anyone can join without payment.
    pub fn is_free(&self) -> bool {
        self.price_cents == 0
    }
}
