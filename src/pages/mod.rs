//! Page Controllers
//!
//! Each page is a small state machine driven by a front-end. Data-bearing
//! pages move `Loading -> Ready -> Redirected`; once redirected a page
//! ignores further actions.
//!
//! Pages receive everything they touch through a [`PageContext`]: the
//! session, the API and the navigator.

pub mod auth;
pub mod journal_detail;
pub mod journal_list;
pub mod new_journal;
pub mod resources;
pub mod root;

pub use auth::{looks_like_email, LoginPage, RegisterPage, EMAIL_PATTERN};
pub use journal_detail::{DeleteOutcome, JournalDetailPage, DELETE_PROMPT};
pub use journal_list::{summary_line, InsightsPanel, JournalListPage, ANALYZED_MARKER, EMPTY_LIST};
pub use new_journal::NewJournalPage;
pub use resources::{support_resources, SupportResource, RESOURCES_NOTICE};
pub use root::resolve_root;

use std::sync::Arc;
use thiserror::Error;

use crate::api::{ApiClientError, JournalApi};
use crate::router::{Navigator, Route};
use crate::session::{SessionContext, SessionError};

/// Lifecycle of a data-bearing page
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    /// Terminal: the page navigated away
    Redirected(Route),
}

impl<T> PageState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }

    pub fn is_redirected(&self) -> bool {
        matches!(self, PageState::Redirected(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Errors surfaced by page actions
#[derive(Error, Debug)]
pub enum PageError {
    #[error("API error: {0}")]
    Api(#[from] ApiClientError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Validation(String),
}

pub type PageResult<T> = std::result::Result<T, PageError>;

/// Everything a page needs from the application root
#[derive(Clone)]
pub struct PageContext {
    pub session: SessionContext,
    pub api: Arc<dyn JournalApi>,
    pub navigator: Arc<dyn Navigator>,
}

impl PageContext {
    pub fn new(
        session: SessionContext,
        api: Arc<dyn JournalApi>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            api,
            navigator,
        }
    }

    /// Navigate and produce the matching terminal state
    pub fn redirect<T>(&self, route: Route) -> PageState<T> {
        self.navigator.push(route.clone());
        PageState::Redirected(route)
    }

    /// The stored token, or a redirect to the login page
    pub fn require_token<T>(&self) -> Result<String, PageState<T>> {
        match self.session.token() {
            Some(token) => Ok(token),
            None => {
                tracing::debug!("No session token, redirecting to login");
                Err(self.redirect(Route::Login))
            }
        }
    }
}

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
