//! State Management
//!
//! Journal data types and the shared session.

pub mod journal;
pub mod session;

pub use journal::{AuthPayload, Journal, Mood, NewJournal, User};
pub use session::{provide_session, use_session, Session};
