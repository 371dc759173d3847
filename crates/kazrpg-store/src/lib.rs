//! Embedded JSON document store for the KazRPG marketplace backend.
//!
//! An in-memory set of typed collections mirrored to a single JSON file,
//! behind a MongoDB-driver-style async facade. Intended as a local/offline
//! stand-in for the production document database: no transactions, no
//! concurrent-writer isolation, no query operators, no indexes.
//!
//! # Architecture
//!
//! The store has three layers:
//! - **CRUD core**: [`StoreData`] holds the five collections and implements
//!   the generic insert/merge/remove/scan operations.
//! - **Backends**: [`JsonFileStore`] (load on open, full-file atomic rewrite
//!   after every mutation) and [`InMemoryStore`] (same semantics, no disk),
//!   both implementing the [`DocumentStore`] contract.
//! - **Facade**: [`Database`] / [`Collection`] expose the async driver-style
//!   API (`find`, `find_one`, `find_by_id`, `create`,
//!   `find_by_id_and_update`, `find_by_id_and_delete`) over a shared store.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum with all failure modes
//! - [`stored`]: Stored trait wiring record types to their collections
//! - [`query`]: exact-match-conjunction queries and update patches
//! - [`data`]: StoreData snapshot and the CRUD core
//! - [`traits`]: DocumentStore backend contract
//! - [`memory`]: InMemoryStore implementation
//! - [`json`]: JsonFileStore implementation
//! - [`collection`]: Database / Collection facade

pub mod collection;
pub mod data;
pub mod error;
pub mod json;
pub mod memory;
pub mod query;
pub mod stored;
pub mod traits;

// Re-export key types for ergonomic use.
pub use collection::{Collection, Database, Deleted};
pub use data::StoreData;
pub use error::StoreError;
pub use json::{JsonFileStore, DEFAULT_PATH};
pub use memory::InMemoryStore;
pub use query::{Patch, Query};
pub use stored::Stored;
pub use traits::DocumentStore;
