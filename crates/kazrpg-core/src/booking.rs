//! Session bookings connecting players to game listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Requested by the player, awaiting GM confirmation.
    Pending,
    /// Confirmed by the GM.
    Confirmed,
    /// Cancelled by either side.
    Cancelled,
    /// The session took place.
    Completed,
}

/// A player's booking of seats in a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Booking {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: RecordId,
    pub game_id: RecordId,
    pub player_id: RecordId,
    /// Seats reserved by this booking.
    pub seats: u32,
    pub status: BookingStatus,
    /// When the booked session takes place.
    pub scheduled_for: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates an unassigned pending booking ready for insertion.
    pub fn new(
        game_id: RecordId,
        player_id: RecordId,
        seats: u32,
        scheduled_for: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Booking {
            id: RecordId::default(),
            game_id,
            player_id,
            seats,
            status: BookingStatus::Pending,
            scheduled_for,
            created_at: now,
            updated_at: now,
        }
    }

    /// `true` while the booking still holds seats (pending or confirmed).
    pub fn is_active(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}
