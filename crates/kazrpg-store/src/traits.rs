//! The [`DocumentStore`] trait defining the backend storage contract.
//!
//! Both backends (JsonFileStore, InMemoryStore) implement this trait with
//! identical semantics, so they are fully swappable: tests and ephemeral
//! sessions run on memory, everything else on the JSON file.
//!
//! The trait is synchronous (not async) -- the store is single-writer by
//! design, and the async driver facade above it serializes access through
//! a lock.

use kazrpg_core::CollectionName;

use crate::error::StoreError;
use crate::query::Patch;
use crate::stored::Stored;

/// The storage contract for the five marketplace collections.
///
/// Lookups return owned clones; "not found" is `None`/`false`, never an
/// error. Mutations on a durable backend persist before returning.
pub trait DocumentStore {
    /// Returns every record of the collection, in insertion order.
    fn find_all<D: Stored>(&self) -> Vec<D>;

    /// Returns the record with the given ID, if any.
    fn find_by_id<D: Stored>(&self, id: &str) -> Option<D>;

    /// Inserts a record, assigning a generated ID when the record's ID is
    /// empty and stamping `created_at`/`updated_at`. Returns the record as
    /// stored.
    fn create<D: Stored>(&mut self, record: D) -> Result<D, StoreError>;

    /// Shallow-merges `patch` over the record with the given ID, refreshing
    /// `updated_at`. Returns `Ok(None)` when no record matches; nothing is
    /// persisted in that case.
    fn update<D: Stored>(&mut self, id: &str, patch: &Patch) -> Result<Option<D>, StoreError>;

    /// Deletes the record with the given ID. Returns `false` (persisting
    /// nothing) when no record matches.
    fn delete<D: Stored>(&mut self, id: &str) -> bool;

    /// Record count for one collection.
    fn count(&self, collection: CollectionName) -> usize;
}
