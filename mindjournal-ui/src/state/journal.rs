//! Journal data types
//!
//! Shapes exchanged with the journal API. Kept in step with the
//! `mindjournal` crate, which the WASM build does not link.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Mood attached to an entry; unknown wire values decode to `Okay`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mood {
    Great,
    Good,
    #[default]
    Okay,
    Bad,
    Terrible,
}

impl Mood {
    /// Picker order
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Okay,
        Mood::Bad,
        Mood::Terrible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Bad => "bad",
            Mood::Terrible => "terrible",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Great => "😄",
            Mood::Good => "🙂",
            Mood::Okay => "😐",
            Mood::Bad => "😔",
            Mood::Terrible => "😢",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Bad => "Bad",
            Mood::Terrible => "Terrible",
        }
    }

    /// Parse a `<select>` value
    pub fn from_value(value: &str) -> Mood {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == value.trim().to_ascii_lowercase())
            .unwrap_or_default()
    }
}

impl From<String> for Mood {
    fn from(value: String) -> Self {
        Mood::from_value(&value)
    }
}

/// A journal entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub analysis: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Journal {
    pub fn is_analyzed(&self) -> bool {
        self.analysis.as_deref().map_or(false, |a| !a.is_empty())
    }

    /// e.g. "Mar 4, 2025"
    pub fn local_date(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%b %-d, %Y")
            .to_string()
    }
}

/// Body of `POST /journals`
#[derive(Debug, Clone, Serialize)]
pub struct NewJournal {
    pub title: String,
    pub content: String,
    pub mood: Mood,
}

/// The signed-in user; fields other than `name` round-trip untouched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_mood_is_okay() {
        let journal: Journal = serde_json::from_value(json!({
            "id": "1",
            "title": "T",
            "mood": "ecstatic",
            "createdAt": "2025-03-04T10:15:00Z"
        }))
        .unwrap();
        assert_eq!(journal.id, "1");
        assert_eq!(journal.mood, Mood::Okay);
        assert_eq!(journal.mood.emoji(), "😐");
        assert!(!journal.is_analyzed());
    }

    #[test]
    fn test_select_values() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_value(mood.as_str()), mood);
        }
        assert_eq!(Mood::from_value(""), Mood::Okay);
    }
}
