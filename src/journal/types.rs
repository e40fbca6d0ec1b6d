//! Journal data types
//!
//! Shapes exchanged with the journal API:
//! - `Journal`: one entry as returned by the backend
//! - `NewJournal`: request body for creating an entry
//! - `User` / `AuthPayload`: the session established by login or register

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::Mood;

/// A journal entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    /// Backend identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// Omitted by list responses
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mood: Mood,
    /// AI feedback, absent until the entry is analyzed
    #[serde(default)]
    pub analysis: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Journal {
    /// Whether the entry carries non-empty analysis text
    pub fn is_analyzed(&self) -> bool {
        self.analysis.as_deref().map_or(false, |a| !a.is_empty())
    }

    /// Creation date in the local timezone, e.g. "Mar 4, 2025"
    pub fn local_date(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%b %-d, %Y")
            .to_string()
    }
}

/// Request body for `POST /journals`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewJournal {
    pub title: String,
    pub content: String,
    pub mood: Mood,
}

/// The signed-in user as returned by the auth endpoints
///
/// Only `name` is interpreted; other fields are kept so the stored record
/// round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Successful login/register body
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_journal_from_backend_shape() {
        let journal: Journal = serde_json::from_value(json!({
            "_id": "65f1c0ffee",
            "title": "Monday",
            "content": "Long day.",
            "mood": "bad",
            "analysis": null,
            "createdAt": "2025-03-04T10:15:00.000Z",
            "user": "u1",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(journal.id, "65f1c0ffee");
        assert_eq!(journal.mood, Mood::Bad);
        assert!(!journal.is_analyzed());
        assert_eq!(journal.created_at.timestamp(), 1741083300);
    }

    #[test]
    fn test_list_item_without_content() {
        let journal: Journal = serde_json::from_value(json!({
            "_id": "1",
            "title": "Short",
            "mood": "great",
            "analysis": "Nice work.",
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert!(journal.content.is_empty());
        assert!(journal.is_analyzed());
    }

    #[test]
    fn test_user_keeps_unknown_fields() {
        let raw = json!({"id": "u1", "name": "Ada", "email": "ada@example.com"});
        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_new_journal_body() {
        let body = NewJournal {
            title: "T".to_string(),
            content: "C".to_string(),
            mood: Mood::Good,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "T", "content": "C", "mood": "good"})
        );
    }
}
