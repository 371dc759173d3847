//! The [`Stored`] trait wiring each record type to its collection.
//!
//! Record identity and timestamps live on the record structs in kazrpg-core;
//! this trait gives the store uniform access to them, plus the mapping from
//! a record type to its slot in [`StoreData`]. It is a storage-layer concern
//! and so lives here rather than in kazrpg-core.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use kazrpg_core::{Booking, CollectionName, Game, Message, RecordId, Review, User};

use crate::data::StoreData;

/// A record type stored in one of the five fixed collections.
pub trait Stored: Serialize + DeserializeOwned + Clone {
    /// Which collection this record type lives in.
    const COLLECTION: CollectionName;

    /// The record's identifier.
    fn id(&self) -> &RecordId;

    /// Replaces the record's identifier (used when the store generates one
    /// at insert time).
    fn assign_id(&mut self, id: RecordId);

    /// Stamps both timestamps at creation: `created_at == updated_at`.
    fn stamp_created(&mut self, at: DateTime<Utc>);

    /// The record's last-modified timestamp.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Advances `updated_at`, never moving it backwards.
    fn stamp_updated(&mut self, at: DateTime<Utc>);

    /// This type's collection within the snapshot.
    fn slot(data: &StoreData) -> &Vec<Self>;

    /// Mutable access to this type's collection within the snapshot.
    fn slot_mut(data: &mut StoreData) -> &mut Vec<Self>;
}

macro_rules! impl_stored {
    ($ty:ty, $collection:expr, $slot:ident) => {
        impl Stored for $ty {
            const COLLECTION: CollectionName = $collection;

            fn id(&self) -> &RecordId {
                &self.id
            }

            fn assign_id(&mut self, id: RecordId) {
                self.id = id;
            }

            fn stamp_created(&mut self, at: DateTime<Utc>) {
                self.created_at = at;
                self.updated_at = at;
            }

            fn updated_at(&self) -> DateTime<Utc> {
                self.updated_at
            }

            fn stamp_updated(&mut self, at: DateTime<Utc>) {
                self.updated_at = self.updated_at.max(at);
            }

            fn slot(data: &StoreData) -> &Vec<Self> {
                &data.$slot
            }

            fn slot_mut(data: &mut StoreData) -> &mut Vec<Self> {
                &mut data.$slot
            }
        }
    };
}

impl_stored!(User, CollectionName::Users, users);
impl_stored!(Game, CollectionName::Games, games);
impl_stored!(Booking, CollectionName::Bookings, bookings);
impl_stored!(Review, CollectionName::Reviews, reviews);
impl_stored!(Message, CollectionName::Messages, messages);

#[cfg(test)]
mod tests {
    use super::*;
    use kazrpg_core::UserRole;

    #[test]
    fn stamp_created_sets_both_timestamps() {
        let mut user = User::new("alice", "alice@example.com", UserRole::Player);
        let at = Utc::now();
        user.stamp_created(at);
        assert_eq!(user.created_at, at);
        assert_eq!(user.updated_at, at);
    }

    #[test]
    fn stamp_updated_never_moves_backwards() {
        let mut user = User::new("alice", "alice@example.com", UserRole::Player);
        let later = Utc::now();
        user.stamp_created(later);
        let earlier = later - chrono::Duration::seconds(30);
        user.stamp_updated(earlier);
        assert_eq!(user.updated_at(), later);
        let even_later = later + chrono::Duration::seconds(30);
        user.stamp_updated(even_later);
        assert_eq!(user.updated_at(), even_later);
    }
}
