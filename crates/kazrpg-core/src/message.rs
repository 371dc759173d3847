//! Direct messages between users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// A direct message from one user to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Message {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: RecordId,
    pub sender_id: RecordId,
    pub recipient_id: RecordId,
    pub body: String,
    /// `true` once the recipient has opened the message.
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Creates an unassigned unread message ready for insertion.
    pub fn new(sender_id: RecordId, recipient_id: RecordId, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Message {
            id: RecordId::default(),
            sender_id,
            recipient_id,
            body: body.into(),
            read: false,
            created_at: now,
            updated_at: now,
        }
    }
}
