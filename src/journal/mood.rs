//! Mood tags
//!
//! The closed set of moods an entry can carry, with their fixed emoji and
//! labels. Wire values are lowercase; anything unrecognized decodes to
//! [`Mood::Okay`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood attached to a journal entry
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
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
    /// All moods in picker order (best to worst)
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Okay,
        Mood::Bad,
        Mood::Terrible,
    ];

    /// Wire value
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

    /// Label shown in the mood picker
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Bad => "Bad",
            Mood::Terrible => "Terrible",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not one of the five moods
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mood: {0} (expected great, good, okay, bad or terrible)")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "great" => Ok(Mood::Great),
            "good" => Ok(Mood::Good),
            "okay" => Ok(Mood::Okay),
            "bad" => Ok(Mood::Bad),
            "terrible" => Ok(Mood::Terrible),
            _ => Err(UnknownMood(s.to_string())),
        }
    }
}

impl From<String> for Mood {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Emoji for a raw mood value, falling back to the okay emoji
pub fn mood_emoji(value: &str) -> &'static str {
    value.parse::<Mood>().unwrap_or_default().emoji()
}
