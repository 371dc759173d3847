//! Marketplace user accounts.
//!
//! [`User`] covers all three marketplace roles: players browsing and booking
//! games, Game Masters hosting them, and administrators moderating the site.
//! Unknown fields are rejected on deserialization so malformed input is
//! caught at the store boundary rather than persisted opaquely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// A user's role on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// A player browsing and booking sessions.
    #[serde(rename = "player")]
    Player,
    /// A Game Master hosting sessions.
    #[serde(rename = "gm")]
    GameMaster,
    /// A site administrator.
    #[serde(rename = "admin")]
    Admin,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct User {
    /// Record identity. Serialized as `_id`; the legacy `id` key is accepted
    /// on load.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: RecordId,
    /// Display name, unique by site convention (not enforced here).
    pub username: String,
    /// Contact address used for login and notifications.
    pub email: String,
    /// Marketplace role.
    pub role: UserRole,
    /// Optional profile text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Games this user has favorited.
    #[serde(default)]
    pub favorites: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates an unassigned user record ready for insertion: the ID is
    /// empty and both timestamps are stamped by the store at insert time.
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        let now = Utc::now();
        User {
            id: RecordId::default(),
            username: username.into(),
            email: email.into(),
            role,
            bio: None,
            favorites: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// `true` if this user hosts games.
    pub fn is_game_master(&self) -> bool {
        self.role == UserRole::GameMaster
    }

    /// Toggles a game in the favorites list, returning `true` if it is now
    /// favorited.
    pub fn toggle_favorite(&mut self, game: &RecordId) -> bool {
        if let Some(pos) = self.favorites.iter().position(|g| g == game) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(game.clone());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_is_unassigned() {
        let user = User::new("alice", "alice@example.com", UserRole::Player);
        assert!(user.id.is_unassigned());
        assert_eq!(user.created_at, user.updated_at);
        assert!(!user.is_game_master());
    }

    #[test]
    fn toggle_favorite_round_trips() {
        let mut user = User::new("alice", "alice@example.com", UserRole::Player);
        let game = RecordId::new("g1");
        assert!(user.toggle_favorite(&game));
        assert_eq!(user.favorites, vec![game.clone()]);
        assert!(!user.toggle_favorite(&game));
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut user = User::new("kaz", "kaz@example.com", UserRole::GameMaster);
        user.id = RecordId::new("u1");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["_id"], "u1");
        assert_eq!(value["role"], "gm");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        // bio is omitted when unset
        assert!(value.get("bio").is_none());
    }

    #[test]
    fn accepts_legacy_id_key() {
        let json = r#"{
            "id": "u-legacy",
            "username": "old",
            "email": "old@example.com",
            "role": "player",
            "createdAt": "2023-01-01T00:00:00Z",
            "updatedAt": "2023-01-01T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_str(), "u-legacy");
    }

    #[test]
    fn rejects_unknown_fields() {
        let json = r#"{
            "_id": "u1",
            "username": "alice",
            "email": "alice@example.com",
            "role": "player",
            "createdAt": "2023-01-01T00:00:00Z",
            "updatedAt": "2023-01-01T00:00:00Z",
            "shoeSize": 42
        }"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
