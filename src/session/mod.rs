//! Session State
//!
//! The client-side session is two storage keys: an opaque bearer token and
//! a JSON-encoded user record.
//!
//! - **storage**: `localStorage`-shaped backends (memory, file)
//! - **store**: the accessor, change notification and the root context
//! - **error**: error types

pub mod error;
pub mod storage;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{
    SessionContext, SessionStore, SessionSubscription, StorageBus, StorageEvent, TOKEN_KEY,
    USER_KEY,
};
