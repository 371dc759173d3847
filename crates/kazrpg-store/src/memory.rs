//! In-memory implementation of [`DocumentStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral
//! sessions. Semantics are identical to the JSON-file backend; only the
//! persistence step is absent.

use chrono::Utc;

use kazrpg_core::CollectionName;

use crate::data::StoreData;
use crate::error::StoreError;
use crate::query::Patch;
use crate::stored::Stored;
use crate::traits::DocumentStore;

/// In-memory implementation of [`DocumentStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: StoreData,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// Read-only view of the whole snapshot.
    pub fn snapshot(&self) -> &StoreData {
        &self.data
    }
}

impl DocumentStore for InMemoryStore {
    fn find_all<D: Stored>(&self) -> Vec<D> {
        self.data.all::<D>().to_vec()
    }

    fn find_by_id<D: Stored>(&self, id: &str) -> Option<D> {
        self.data.get::<D>(id).cloned()
    }

    fn create<D: Stored>(&mut self, record: D) -> Result<D, StoreError> {
        self.data.insert(record, Utc::now())
    }

    fn update<D: Stored>(&mut self, id: &str, patch: &Patch) -> Result<Option<D>, StoreError> {
        self.data.merge(id, patch, Utc::now())
    }

    fn delete<D: Stored>(&mut self, id: &str) -> bool {
        self.data.remove::<D>(id)
    }

    fn count(&self, collection: CollectionName) -> usize {
        self.data.len(collection)
    }
}

#[cfg(test)]
mod tests {
    use kazrpg_core::{User, UserRole};
    use serde_json::json;

    use super::*;

    #[test]
    fn create_then_find_by_id() {
        let mut store = InMemoryStore::new();
        let created = store
            .create(User::new("alice", "alice@example.com", UserRole::Player))
            .unwrap();

        let found: User = store.find_by_id(created.id.as_str()).unwrap();
        assert_eq!(found, created);
        assert!(store.find_by_id::<User>("missing").is_none());
    }

    #[test]
    fn rapid_creation_yields_distinct_ids() {
        let mut store = InMemoryStore::new();
        let mut ids = std::collections::HashSet::new();
        for n in 0..1000 {
            let created = store
                .create(User::new(
                    format!("user{n}"),
                    format!("user{n}@example.com"),
                    UserRole::Player,
                ))
                .unwrap();
            ids.insert(created.id.as_str().to_string());
        }
        assert_eq!(ids.len(), 1000);
        assert_eq!(store.count(CollectionName::Users), 1000);
    }

    #[test]
    fn update_then_delete() {
        let mut store = InMemoryStore::new();
        let created = store
            .create(User::new("alice", "alice@example.com", UserRole::Player))
            .unwrap();

        let patch = match json!({"username": "alice2"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let updated = store
            .update::<User>(created.id.as_str(), &patch)
            .unwrap()
            .unwrap();
        assert_eq!(updated.username, "alice2");

        assert!(store.delete::<User>(created.id.as_str()));
        assert!(store.find_by_id::<User>(created.id.as_str()).is_none());
        assert_eq!(store.count(CollectionName::Users), 0);
    }
}
