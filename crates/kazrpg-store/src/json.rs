//! JSON-file implementation of [`DocumentStore`].
//!
//! [`JsonFileStore`] loads the whole store from one JSON file at open time
//! and rewrites the whole file after every successful mutation. Writes go
//! through a temp file in the same directory followed by an atomic rename,
//! so a crash mid-write leaves the previous complete file intact.
//!
//! Failure policy: a missing or unparsable file at open time is replaced
//! with an empty store (logged, never surfaced); a failed persist is logged
//! at `warn` and swallowed, leaving the in-memory state authoritative until
//! the next successful write.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;

use kazrpg_core::CollectionName;

use crate::data::StoreData;
use crate::error::StoreError;
use crate::query::Patch;
use crate::stored::Stored;
use crate::traits::DocumentStore;

/// Store file location used by [`JsonFileStore::open_default`], relative to
/// the working directory.
pub const DEFAULT_PATH: &str = "data/db.json";

/// JSON-file-backed implementation of [`DocumentStore`].
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonFileStore {
    /// Opens (or creates) a store file at `path`.
    ///
    /// Parent directories are created as needed. A missing or corrupt file
    /// falls back to an empty store which is persisted immediately, so a bad
    /// file is deterministically replaced rather than failing every load.
    /// Only directory creation can fail.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let loaded = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<StoreData>(&text) {
                Ok(data) => {
                    tracing::info!(path = %path.display(), "loaded store file");
                    Some(data)
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "corrupt store file, starting empty"
                    );
                    None
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no store file yet, starting empty");
                None
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable store file, starting empty"
                );
                None
            }
        };

        let fresh = loaded.is_none();
        let store = JsonFileStore {
            path,
            data: loaded.unwrap_or_default(),
        };
        if fresh {
            store.persist();
        }
        Ok(store)
    }

    /// Opens the store at [`DEFAULT_PATH`].
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(DEFAULT_PATH)
    }

    /// The backing file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the whole snapshot.
    pub fn snapshot(&self) -> &StoreData {
        &self.data
    }

    /// Rewrites the whole store file, logging and swallowing any failure.
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to persist store file"
            );
        }
    }

    /// Serializes the snapshot to pretty JSON and atomically replaces the
    /// store file via a temp file in the same directory.
    fn try_persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.data)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn find_all<D: Stored>(&self) -> Vec<D> {
        self.data.all::<D>().to_vec()
    }

    fn find_by_id<D: Stored>(&self, id: &str) -> Option<D> {
        self.data.get::<D>(id).cloned()
    }

    fn create<D: Stored>(&mut self, record: D) -> Result<D, StoreError> {
        let created = self.data.insert(record, Utc::now())?;
        self.persist();
        Ok(created)
    }

    fn update<D: Stored>(&mut self, id: &str, patch: &Patch) -> Result<Option<D>, StoreError> {
        let updated = self.data.merge::<D>(id, patch, Utc::now())?;
        if updated.is_some() {
            self.persist();
        }
        Ok(updated)
    }

    fn delete<D: Stored>(&mut self, id: &str) -> bool {
        let removed = self.data.remove::<D>(id);
        if removed {
            self.persist();
        }
        removed
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

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("data").join("db.json")
    }

    #[test]
    fn open_creates_parent_directories_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let store = JsonFileStore::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.snapshot().is_empty());

        // The fresh file is a valid empty store with all five keys.
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        for name in CollectionName::ALL {
            assert!(value[name.as_str()].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let created = {
            let mut store = JsonFileStore::open(&path).unwrap();
            store
                .create(User::new("alice", "alice@example.com", UserRole::Player))
                .unwrap()
        };

        let reopened = JsonFileStore::open(&path).unwrap();
        let found: User = reopened.find_by_id(created.id.as_str()).unwrap();
        assert_eq!(found, created);
    }

    #[test]
    fn corrupt_file_is_replaced_with_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{\"users\": [truncated").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        for name in CollectionName::ALL {
            assert_eq!(store.count(name), 0);
        }

        // The bad file has been overwritten with a valid empty store.
        let text = fs::read_to_string(&path).unwrap();
        let reloaded: StoreData = serde_json::from_str(&text).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn delete_missing_id_does_not_touch_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let mut store = JsonFileStore::open(&path).unwrap();
        store
            .create(User::new("alice", "alice@example.com", UserRole::Player))
            .unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(!store.delete::<User>("missing"));
        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);

        let reloaded: StoreData = serde_json::from_str(&after).unwrap();
        assert_eq!(reloaded.len(CollectionName::Users), 1);
    }

    #[test]
    fn update_persists_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let mut store = JsonFileStore::open(&path).unwrap();
        let created = store
            .create(User::new("alice", "alice@example.com", UserRole::Player))
            .unwrap();

        let patch = match json!({"username": "alice2"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        store.update::<User>(created.id.as_str(), &patch).unwrap();

        let reloaded: StoreData =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded.users[0].username, "alice2");
    }
}
