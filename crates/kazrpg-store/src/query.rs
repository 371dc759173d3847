//! Exact-match queries and update patches.
//!
//! A [`Query`] is a conjunction of field equalities over a record's JSON
//! representation: every listed field must be present and strictly equal.
//! There are no operators, partial matches, or type coercion. An empty
//! query matches every record.
//!
//! A [`Patch`] is the field map for shallow-merge updates. Reserved keys
//! (`_id`, the legacy `id`, and the store-managed timestamps) are ignored
//! when a patch is applied.

use serde_json::{Map, Value};

/// Field map applied as a shallow merge by update operations.
pub type Patch = Map<String, Value>;

/// Keys a patch may not override: identity and store-managed timestamps.
pub const RESERVED_FIELDS: [&str; 4] = ["_id", "id", "createdAt", "updatedAt"];

/// An exact-match conjunction over record fields.
#[derive(Debug, Clone, Default)]
pub struct Query(Map<String, Value>);

impl Query {
    /// An empty query, matching every record.
    pub fn new() -> Self {
        Query::default()
    }

    /// Adds a field equality, using the record's wire field names
    /// (camelCase, `_id`).
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// `true` if no field equalities have been added.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` if `record` (a serialized record object) carries every queried
    /// field with a strictly equal value.
    pub fn matches(&self, record: &Value) -> bool {
        let Some(obj) = record.as_object() else {
            return false;
        };
        self.0.iter().all(|(key, value)| obj.get(key) == Some(value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        let query = Query::new();
        assert!(query.is_empty());
        assert!(query.matches(&json!({"_id": "1"})));
        assert!(query.matches(&json!({})));
    }

    #[test]
    fn conjunction_requires_every_field() {
        let admin_active = Query::new().field("role", "admin").field("active", true);
        assert!(admin_active.matches(&json!({"_id": 1, "role": "admin", "active": true})));
        assert!(!admin_active.matches(&json!({"_id": 2, "role": "admin", "active": false})));
        assert!(!admin_active.matches(&json!({"_id": 3, "active": true})));
    }

    #[test]
    fn equality_is_strict() {
        let query = Query::new().field("seats", 2);
        assert!(query.matches(&json!({"seats": 2})));
        // No coercion: the string "2" is not the number 2.
        assert!(!query.matches(&json!({"seats": "2"})));
        assert!(!query.matches(&json!({"seats": 2.5})));
    }

    #[test]
    fn non_objects_never_match() {
        let query = Query::new().field("role", "admin");
        assert!(!query.matches(&json!("admin")));
        assert!(!query.matches(&json!(null)));
    }
}
