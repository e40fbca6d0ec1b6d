//! Journal domain types
//!
//! - **mood**: the five-value mood tag and its emoji mapping
//! - **types**: entries, users and auth payloads as the API returns them

pub mod mood;
pub mod types;

pub use mood::{mood_emoji, Mood, UnknownMood};
pub use types::{AuthPayload, Journal, NewJournal, User};
