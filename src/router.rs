//! Routes and Navigation
//!
//! Typed application routes and the [`Navigator`] seam every redirect goes
//! through. Front-ends supply their own navigator; [`History`] records the
//! route stack and serves the terminal client and tests.

use std::fmt;
use std::sync::Mutex;

/// An application route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` - redirects based on session
    Root,
    Login,
    Register,
    /// `/journals` - entry list
    Journals,
    /// `/journals/new` - new-entry form
    NewJournal,
    /// `/journals/:id` - entry detail
    JournalDetail(String),
    Resources,
}

impl Route {
    /// URL path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Journals => "/journals".to_string(),
            Route::NewJournal => "/journals/new".to_string(),
            Route::JournalDetail(id) => format!("/journals/{}", id),
            Route::Resources => "/resources".to_string(),
        }
    }

    /// Parse a URL path; query strings and trailing slashes are ignored
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Root),
            ["login"] => Some(Route::Login),
            ["register"] => Some(Route::Register),
            ["resources"] => Some(Route::Resources),
            ["journals"] => Some(Route::Journals),
            ["journals", "new"] => Some(Route::NewJournal),
            ["journals", id] => Some(Route::JournalDetail(id.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Performs client-side navigation
pub trait Navigator: Send + Sync {
    /// Navigate to `route`, pushing it onto the history
    fn push(&self, route: Route);
}

/// Recorded navigation history
#[derive(Debug)]
pub struct History {
    entries: Mutex<Vec<Route>>,
}

impl History {
    /// History starting at `initial`
    pub fn new(initial: Route) -> Self {
        Self {
            entries: Mutex::new(vec![initial]),
        }
    }

    /// Route currently displayed
    pub fn current(&self) -> Route {
        self.lock().last().cloned().unwrap_or(Route::Root)
    }

    /// All routes visited, oldest first
    pub fn entries(&self) -> Vec<Route> {
        self.lock().clone()
    }

    /// Number of navigations performed since creation
    pub fn navigations(&self) -> usize {
        self.lock().len().saturating_sub(1)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Route>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Root)
    }
}

impl Navigator for History {
    fn push(&self, route: Route) {
        tracing::debug!(route = %route, "Navigate");
        self.lock().push(route);
    }
}
