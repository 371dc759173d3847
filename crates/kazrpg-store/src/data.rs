//! The whole-store snapshot and the generic CRUD core.
//!
//! [`StoreData`] is exactly what the store file serializes to: one object
//! with the five collection keys, each an array of records in insertion
//! order. Insertion order is the only ordering guarantee. All lookups are
//! linear scans, which is acceptable for a development-scale store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kazrpg_core::{Booking, CollectionName, Game, Message, RecordId, Review, User};

use crate::error::StoreError;
use crate::query::{Patch, RESERVED_FIELDS};
use crate::stored::Stored;

/// In-memory snapshot of all five collections; the store file's exact shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreData {
    pub users: Vec<User>,
    pub games: Vec<Game>,
    pub bookings: Vec<Booking>,
    pub reviews: Vec<Review>,
    pub messages: Vec<Message>,
}

impl StoreData {
    /// Full ordered view of one collection.
    pub fn all<D: Stored>(&self) -> &[D] {
        D::slot(self)
    }

    /// Linear scan for a record by ID.
    pub fn get<D: Stored>(&self, id: &str) -> Option<&D> {
        D::slot(self).iter().find(|record| record.id().as_str() == id)
    }

    /// Appends a record, assigning identity and creation timestamps.
    ///
    /// An unassigned (empty) ID is replaced with a generated one; a
    /// caller-supplied ID that collides with an existing record is rejected
    /// with [`StoreError::DuplicateId`].
    pub fn insert<D: Stored>(
        &mut self,
        mut record: D,
        now: DateTime<Utc>,
    ) -> Result<D, StoreError> {
        if record.id().is_unassigned() {
            let mut id = RecordId::generate();
            while self.get::<D>(id.as_str()).is_some() {
                id = RecordId::generate();
            }
            record.assign_id(id);
        } else if self.get::<D>(record.id().as_str()).is_some() {
            return Err(StoreError::DuplicateId {
                collection: D::COLLECTION,
                id: record.id().clone(),
            });
        }
        record.stamp_created(now);
        D::slot_mut(self).push(record.clone());
        Ok(record)
    }

    /// Shallow-merges `patch` over the record with the given ID, in place.
    ///
    /// Returns `Ok(None)` when no record matches. Reserved keys in the patch
    /// are ignored, so `_id` and `created_at` survive every update; unknown
    /// or ill-typed patch fields fail deserialization and reject the whole
    /// update. `updated_at` is refreshed and never moves backwards.
    pub fn merge<D: Stored>(
        &mut self,
        id: &str,
        patch: &Patch,
        now: DateTime<Utc>,
    ) -> Result<Option<D>, StoreError> {
        let Some(pos) = D::slot(self)
            .iter()
            .position(|record| record.id().as_str() == id)
        else {
            return Ok(None);
        };

        let mut value = serde_json::to_value(&D::slot(self)[pos])?;
        let object = value.as_object_mut().ok_or(StoreError::NotAnObject {
            collection: D::COLLECTION,
        })?;
        for (key, field) in patch {
            if RESERVED_FIELDS.contains(&key.as_str()) {
                continue;
            }
            object.insert(key.clone(), field.clone());
        }

        let mut merged: D = serde_json::from_value(value)?;
        merged.stamp_updated(now);
        D::slot_mut(self)[pos] = merged.clone();
        Ok(Some(merged))
    }

    /// Removes the record with the given ID, shifting subsequent records.
    ///
    /// Returns `false` when no record matches.
    pub fn remove<D: Stored>(&mut self, id: &str) -> bool {
        let slot = D::slot_mut(self);
        match slot.iter().position(|record| record.id().as_str() == id) {
            Some(pos) => {
                slot.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Record count for one collection.
    pub fn len(&self, collection: CollectionName) -> usize {
        match collection {
            CollectionName::Users => self.users.len(),
            CollectionName::Games => self.games.len(),
            CollectionName::Bookings => self.bookings.len(),
            CollectionName::Reviews => self.reviews.len(),
            CollectionName::Messages => self.messages.len(),
        }
    }

    /// `true` when every collection is empty.
    pub fn is_empty(&self) -> bool {
        CollectionName::ALL.iter().all(|&c| self.len(c) == 0)
    }
}
