//! The driver-compatibility facade: [`Database`] and [`Collection`].
//!
//! Backend code in the KazRPG server is written against an async,
//! query-object-based document-database API. This module presents that API
//! over the synchronous [`DocumentStore`] backends by wrapping the store in
//! `Arc<tokio::sync::Mutex<_>>`: every operation awaits the lock, runs to
//! completion against the store, and releases -- so two operations issued in
//! sequence always observe a linearized view.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use kazrpg_core::RecordId;

use crate::error::StoreError;
use crate::json::JsonFileStore;
use crate::memory::InMemoryStore;
use crate::query::{Patch, Query};
use crate::stored::Stored;
use crate::traits::DocumentStore;

/// Handle to a shared store; hands out per-collection accessors.
///
/// Construct one explicitly and pass it to whatever needs data access --
/// there is no process-wide singleton, so tests can run isolated instances
/// side by side.
pub struct Database<S = JsonFileStore> {
    store: Arc<Mutex<S>>,
}

impl Database<JsonFileStore> {
    /// Opens a database backed by the JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Database::new(JsonFileStore::open(path)?))
    }

    /// Opens a database at the default store-file location.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Database::new(JsonFileStore::open_default()?))
    }
}

impl Database<InMemoryStore> {
    /// A database with no persistence, for tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Database::new(InMemoryStore::new())
    }
}

impl<S: DocumentStore> Database<S> {
    /// Wraps an already-constructed backend.
    pub fn new(store: S) -> Self {
        Database {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// An accessor bound to the collection holding records of type `D`.
    pub fn collection<D: Stored>(&self) -> Collection<D, S> {
        Collection {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<S> Clone for Database<S> {
    fn clone(&self) -> Self {
        Database {
            store: self.store.clone(),
        }
    }
}

/// Async accessor for one collection, bound to its record type.
pub struct Collection<D, S = JsonFileStore> {
    store: Arc<Mutex<S>>,
    _record: PhantomData<D>,
}

impl<D: Stored, S: DocumentStore> Collection<D, S> {
    /// Returns every record matching `query`; an empty query returns the
    /// whole collection.
    pub async fn find(&self, query: &Query) -> Result<Vec<D>, StoreError> {
        let store = self.store.lock().await;
        let records = store.find_all::<D>();
        if query.is_empty() {
            return Ok(records);
        }
        let mut matched = Vec::new();
        for record in records {
            if query.matches(&serde_json::to_value(&record)?) {
                matched.push(record);
            }
        }
        Ok(matched)
    }

    /// Returns the first record matching `query`, in collection order.
    pub async fn find_one(&self, query: &Query) -> Result<Option<D>, StoreError> {
        let store = self.store.lock().await;
        for record in store.find_all::<D>() {
            if query.matches(&serde_json::to_value(&record)?) {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Returns the record with the given ID, if any.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<D>, StoreError> {
        Ok(self.store.lock().await.find_by_id::<D>(id))
    }

    /// Inserts a record and returns it as stored, with identity and
    /// timestamps assigned.
    pub async fn create(&self, record: D) -> Result<D, StoreError> {
        self.store.lock().await.create(record)
    }

    /// Shallow-merges `patch` over the record with the given ID and returns
    /// the updated record, or `Ok(None)` if no record matches.
    pub async fn find_by_id_and_update(
        &self,
        id: &str,
        patch: Patch,
    ) -> Result<Option<D>, StoreError> {
        self.store.lock().await.update::<D>(id, &patch)
    }

    /// Deletes the record with the given ID, reporting the deleted identity
    /// in the driver's `{ "_id": ... }` shape, or `Ok(None)` if no record
    /// matches.
    pub async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Deleted>, StoreError> {
        let mut store = self.store.lock().await;
        if store.delete::<D>(id) {
            Ok(Some(Deleted {
                id: RecordId::new(id),
            }))
        } else {
            Ok(None)
        }
    }
}

impl<D, S> Clone for Collection<D, S> {
    fn clone(&self) -> Self {
        Collection {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

/// Identity of a deleted record, mirroring the driver's return shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    #[serde(rename = "_id")]
    pub id: RecordId,
}
