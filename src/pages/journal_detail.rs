//! `/journals/:id` - one entry with analyze and delete

use super::{Confirm, PageContext, PageResult, PageState};
use crate::api::ApiResponse;
use crate::journal::Journal;
use crate::router::Route;

/// Asked before deleting an entry
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this entry?";

/// What a delete action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent
    Declined,
    Deleted,
    /// The backend refused or was unreachable; the page still left
    Failed(Option<String>),
}

pub struct JournalDetailPage {
    id: String,
    state: PageState<Journal>,
    analyzing: bool,
}

impl JournalDetailPage {
    /// Require a session, then fetch the entry
    pub async fn mount(ctx: &PageContext, id: &str) -> PageResult<Self> {
        let mut page = Self {
            id: id.to_string(),
            state: PageState::Loading,
            analyzing: false,
        };

        let token = match ctx.require_token() {
            Ok(token) => token,
            Err(redirected) => {
                page.state = redirected;
                return Ok(page);
            }
        };

        page.state = match ctx.api.get_journal(id, &token).await? {
            ApiResponse::Success(journal) => PageState::Ready(journal),
            failure => {
                tracing::debug!(id, message = ?failure.message_or(""), "Journal unavailable");
                ctx.redirect(Route::Journals)
            }
        };
        Ok(page)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &PageState<Journal> {
        &self.state
    }

    pub fn journal(&self) -> Option<&Journal> {
        self.state.ready()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn analyze_label(&self) -> &'static str {
        if self.analyzing {
            "Analyzing..."
        } else {
            "Analyze Entry"
        }
    }

    /// Mark analysis pending; returns the entry id to analyze
    pub fn begin_analyze(&mut self) -> Option<String> {
        if self.analyzing {
            return None;
        }
        let id = self.journal()?.id.clone();
        self.analyzing = true;
        Some(id)
    }

    /// Apply an analyze response; returns whether the entry was replaced
    ///
    /// Only a response carrying analysis text replaces the entry, so the
    /// analysis never goes back to empty.
    pub fn finish_analyze(&mut self, response: ApiResponse<Journal>) -> bool {
        self.analyzing = false;
        match response {
            ApiResponse::Success(journal) if journal.is_analyzed() && self.state.is_ready() => {
                self.state = PageState::Ready(journal);
                true
            }
            _ => false,
        }
    }

    /// Request AI feedback for the entry
    pub async fn analyze(&mut self, ctx: &PageContext) -> PageResult<bool> {
        let Some(token) = ctx.session.token() else {
            return Ok(false);
        };
        let Some(id) = self.begin_analyze() else {
            return Ok(false);
        };

        match ctx.api.analyze_journal(&id, &token).await {
            Ok(response) => Ok(self.finish_analyze(response)),
            Err(e) => {
                self.analyzing = false;
                Err(e.into())
            }
        }
    }

    /// Confirm, delete, then return to the list whatever the backend said
    pub async fn delete(
        &mut self,
        ctx: &PageContext,
        confirm: &dyn Confirm,
    ) -> PageResult<DeleteOutcome> {
        let Some(id) = self.journal().map(|j| j.id.clone()) else {
            return Ok(DeleteOutcome::Declined);
        };
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Declined);
        }
        let Some(token) = ctx.session.token() else {
            return Ok(DeleteOutcome::Declined);
        };

        let outcome = match ctx.api.delete_journal(&id, &token).await {
            Ok(ApiResponse::Success(_)) => {
                tracing::info!(%id, "Journal deleted");
                DeleteOutcome::Deleted
            }
            Ok(ApiResponse::Failure { message }) => {
                tracing::warn!(%id, ?message, "Journal delete refused");
                DeleteOutcome::Failed(message)
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Journal delete failed");
                DeleteOutcome::Failed(Some(e.to_string()))
            }
        };

        self.state = ctx.redirect(Route::Journals);
        Ok(outcome)
    }

    /// Back to the list
    pub fn back(&mut self, ctx: &PageContext) {
        if !self.state.is_redirected() {
            self.state = ctx.redirect(Route::Journals);
        }
    }
}
