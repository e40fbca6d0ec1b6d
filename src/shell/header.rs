//! Application header
//!
//! Brand, greeting and logout. The greeting tracks the session written by
//! other instances through a [`SessionSubscription`] held between
//! [`Header::mount`] and [`Header::unmount`].

use crate::router::{Navigator, Route};
use crate::session::{SessionContext, SessionResult, SessionSubscription};

/// Brand shown in the header
pub const BRAND: &str = "MindJournal";

pub struct Header {
    session: SessionContext,
    user_name: Option<String>,
    subscription: Option<SessionSubscription>,
}

impl Header {
    pub fn new(session: SessionContext) -> Self {
        let user_name = session.snapshot().map(|user| user.name);
        Self {
            session,
            user_name,
            subscription: None,
        }
    }

    /// Start observing session changes made by other instances
    pub fn mount(&mut self) {
        if self.subscription.is_none() {
            self.subscription = Some(self.session.subscribe());
        }
        self.refresh();
    }

    /// Stop observing; safe to call when not mounted
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// `Hi, {name}` when a user is stored
    pub fn greeting(&self) -> Option<String> {
        self.user_name.as_ref().map(|name| format!("Hi, {}", name))
    }

    /// Re-read the session snapshot
    pub fn refresh(&mut self) {
        self.user_name = self.session.snapshot().map(|user| user.name);
    }

    /// Apply pending changes without waiting; returns whether any arrived
    pub fn sync_changes(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };

        let mut changed = false;
        while subscription.try_changed().is_some() {
            changed = true;
        }
        if changed {
            self.refresh();
        }
        changed
    }

    /// Wait for the next external change and refresh the greeting
    ///
    /// Returns `false` when not mounted or the bus has closed.
    pub async fn changed(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };

        match subscription.changed().await {
            Some(event) => {
                tracing::debug!(key = ?event.key, "Session changed elsewhere");
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Clear the session and go to the login page
    ///
    /// Navigation happens even when clearing storage fails; the error is
    /// still returned.
    pub fn logout(&mut self, navigator: &dyn Navigator) -> SessionResult<()> {
        let cleared = self.session.clear();
        if let Err(e) = &cleared {
            tracing::warn!(error = %e, "Failed to clear session on logout");
        }
        self.user_name = None;
        navigator.push(Route::Login);
        cleared
    }

    /// Brand click
    pub fn go_home(&self, navigator: &dyn Navigator) {
        navigator.push(Route::Journals);
    }
}

impl Drop for Header {
    fn drop(&mut self) {
        self.unmount();
    }
}
