//! # MindJournal
//!
//! Client core for the MindJournal journaling service: session handling,
//! the journal API client, navigation and the page controllers that a
//! front-end (the `mindjournal` terminal client, or the browser UI in
//! `mindjournal-ui/`) drives.
//!
//! ## Modules
//!
//! - [`journal`]: entries, moods and users as the backend returns them
//! - [`session`]: the stored token and user, with change notification
//! - [`api`]: HTTP client for the journal backend
//! - [`router`]: routes and the navigator seam
//! - [`shell`]: header, sidebar and quote of the day
//! - [`pages`]: one controller per screen
//! - [`speech`]: optional dictation capability
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mindjournal::pages::{JournalListPage, LoginPage, PageContext};
//! use mindjournal::{History, HttpApiClient, SessionContext, SessionStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = PageContext::new(
//!         SessionContext::new(SessionStore::in_memory()),
//!         Arc::new(HttpApiClient::new("http://localhost:4000/api")?),
//!         Arc::new(History::default()),
//!     );
//!
//!     let mut login = LoginPage::new();
//!     login.email = "ada@example.com".to_string();
//!     login.password = "secret".to_string();
//!     login.submit(&ctx).await?;
//!
//!     let list = JournalListPage::mount(&ctx).await?;
//!     for entry in list.entries().unwrap_or_default() {
//!         println!("{} {}", entry.mood.emoji(), entry.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod journal;
pub mod pages;
pub mod router;
pub mod session;
pub mod shell;
pub mod speech;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export top-level types for convenience
pub use api::{ApiClientError, ApiResponse, HttpApiClient, JournalApi};

pub use config::{Config, ConfigError};

pub use journal::{mood_emoji, AuthPayload, Journal, Mood, NewJournal, User};

pub use pages::{PageContext, PageError, PageState};

pub use router::{History, Navigator, Route};

pub use session::{
    FileStorage, MemoryStorage, SessionContext, SessionError, SessionStorage, SessionStore,
    StorageBus,
};

pub use shell::{load_quote, AppLayout, Header, Quote, QuoteSource, ZenQuotesClient};

pub use speech::{Dictation, SpeechError, SpeechRecognizer};
