//! `/journals` - the entry list and weekly insights

use super::{PageContext, PageResult, PageState};
use crate::api::ApiResponse;
use crate::journal::Journal;
use crate::router::Route;

/// Shown when the user has no entries
pub const EMPTY_LIST: &str = "No journal entries yet.";

/// Marker next to analyzed entries
pub const ANALYZED_MARKER: &str = "✓ Analyzed";

const INSIGHTS_FAILED: &str = "Failed to get insights";

/// Weekly insights sub-flow, independent of the list itself
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InsightsPanel {
    loading: bool,
    error: Option<String>,
    result: Option<String>,
}

impl InsightsPanel {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Analyzing..."
        } else {
            "Weekly Insights"
        }
    }

    /// Start a request; `false` while one is already pending
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.result = None;
        true
    }

    pub fn finish(&mut self, response: ApiResponse<String>) {
        self.loading = false;
        match response {
            ApiResponse::Success(text) => self.result = Some(text),
            failure => self.error = failure.message_or(INSIGHTS_FAILED),
        }
    }

    /// The request never produced a response
    pub fn abort(&mut self) {
        self.loading = false;
        self.error = Some(INSIGHTS_FAILED.to_string());
    }

    /// Close button on the insights card
    pub fn dismiss(&mut self) {
        self.result = None;
    }
}

pub struct JournalListPage {
    state: PageState<Vec<Journal>>,
    insights: InsightsPanel,
}

impl JournalListPage {
    /// Require a session, then load the list
    ///
    /// A failed list response means the token was rejected: the session is
    /// cleared and the page redirects to login.
    pub async fn mount(ctx: &PageContext) -> PageResult<Self> {
        let mut page = Self {
            state: PageState::Loading,
            insights: InsightsPanel::default(),
        };

        let token = match ctx.require_token() {
            Ok(token) => token,
            Err(redirected) => {
                page.state = redirected;
                return Ok(page);
            }
        };

        page.state = match ctx.api.list_journals(&token).await? {
            ApiResponse::Success(journals) => {
                tracing::debug!(count = journals.len(), "Journals loaded");
                PageState::Ready(journals)
            }
            failure => {
                tracing::info!(message = ?failure.message_or(""), "Journal list rejected, signing out");
                ctx.session.clear()?;
                ctx.redirect(Route::Login)
            }
        };
        Ok(page)
    }

    pub fn state(&self) -> &PageState<Vec<Journal>> {
        &self.state
    }

    pub fn entries(&self) -> Option<&[Journal]> {
        self.state.ready().map(Vec::as_slice)
    }

    pub fn insights(&self) -> &InsightsPanel {
        &self.insights
    }

    /// Fetch a fresh weekly summary
    pub async fn request_insights(&mut self, ctx: &PageContext) -> PageResult<()> {
        if !self.state.is_ready() {
            return Ok(());
        }
        let Some(token) = ctx.session.token() else {
            return Ok(());
        };
        if !self.insights.begin() {
            return Ok(());
        }

        match ctx.api.weekly_insights(&token).await {
            Ok(response) => {
                self.insights.finish(response);
                Ok(())
            }
            Err(e) => {
                self.insights.abort();
                Err(e.into())
            }
        }
    }

    pub fn dismiss_insights(&mut self) {
        self.insights.dismiss();
    }

    pub fn open_entry(&mut self, ctx: &PageContext, id: &str) {
        if self.state.is_ready() {
            self.state = ctx.redirect(Route::JournalDetail(id.to_string()));
        }
    }

    pub fn new_entry(&mut self, ctx: &PageContext) {
        if self.state.is_ready() {
            self.state = ctx.redirect(Route::NewJournal);
        }
    }
}

/// One list row: title, mood emoji, date and the analyzed marker
pub fn summary_line(journal: &Journal) -> String {
    let mut line = format!(
        "{} {}  ({})",
        journal.mood.emoji(),
        journal.title,
        journal.local_date()
    );
    if journal.is_analyzed() {
        line.push_str("  ");
        line.push_str(ANALYZED_MARKER);
    }
    line
}
