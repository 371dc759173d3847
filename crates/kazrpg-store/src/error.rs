//! Storage error types for kazrpg-store.
//!
//! [`StoreError`] covers the caller-visible failure modes. "Not found" is
//! deliberately absent: lookups return `Option`/`bool`, and persistence
//! failures are logged and swallowed rather than surfaced (the in-memory
//! state stays authoritative until the next successful write).

use kazrpg_core::{CollectionName, RecordId};
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// JSON serialization or deserialization failed. Also raised when an
    /// update patch carries unknown or ill-typed fields.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O failure while setting up the store file's directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied record ID collides with an existing record.
    #[error("duplicate id in {collection}: '{id}'")]
    DuplicateId {
        collection: CollectionName,
        id: RecordId,
    },

    /// A record serialized to something other than a JSON object, so it
    /// cannot be patched field-by-field.
    #[error("record in {collection} did not serialize to a JSON object")]
    NotAnObject { collection: CollectionName },
}
