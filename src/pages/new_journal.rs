//! `/journals/new` - the entry form with optional dictation

use super::{PageContext, PageError, PageResult};
use crate::api::ApiResponse;
use crate::journal::{Mood, NewJournal};
use crate::router::Route;
use crate::speech::{self, Dictation, SpeechRecognizer};

const CREATE_FAILED: &str = "Failed to create journal";

#[derive(Debug, Default, Clone)]
pub struct NewJournalPage {
    pub title: String,
    pub content: String,
    mood: Mood,
    dictation: Dictation,
    pending: bool,
    error: Option<String>,
    /// Set once the form has navigated away
    redirected: Option<Route>,
}

impl NewJournalPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn dictation(&self) -> &Dictation {
        &self.dictation
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Where the form went after a submit, if it has left
    pub fn redirected(&self) -> Option<&Route> {
        self.redirected.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            "Saving..."
        } else {
            "Save Entry"
        }
    }

    /// Start or stop dictation into the content field
    pub fn toggle_dictation(&mut self, recognizer: Option<&dyn SpeechRecognizer>) -> bool {
        self.dictation.toggle(recognizer)
    }

    /// A recognized phrase arrived
    pub fn append_transcript(&mut self, transcript: &str) {
        self.content = speech::append_transcript(&self.content, transcript);
    }

    pub fn validate(&self) -> PageResult<()> {
        if self.title.trim().is_empty() {
            return Err(PageError::Validation("Title is required".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(PageError::Validation("Content is required".to_string()));
        }
        Ok(())
    }

    pub fn entry(&self) -> NewJournal {
        NewJournal {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            mood: self.mood,
        }
    }

    /// Create the entry and open it; returns the new id
    ///
    /// Without a session this redirects to login and sends nothing. On
    /// failure the fields are kept and [`error`](Self::error) is set. Once
    /// the form has redirected, further submits do nothing.
    pub async fn submit(&mut self, ctx: &PageContext) -> PageResult<Option<String>> {
        if self.pending || self.redirected.is_some() {
            return Ok(None);
        }
        self.error = None;
        if let Err(e) = self.validate() {
            self.error = Some(e.to_string());
            return Ok(None);
        }
        let Some(token) = ctx.session.token() else {
            self.leave(ctx, Route::Login);
            return Ok(None);
        };

        self.pending = true;
        let result = ctx.api.create_journal(&self.entry(), &token).await;
        self.pending = false;

        match result {
            Ok(ApiResponse::Success(journal)) => {
                tracing::info!(id = %journal.id, mood = %journal.mood, "Journal created");
                self.leave(ctx, Route::JournalDetail(journal.id.clone()));
                Ok(Some(journal.id))
            }
            Ok(failure) => {
                self.error = failure.message_or(CREATE_FAILED);
                Ok(None)
            }
            Err(e) => {
                self.error = Some(CREATE_FAILED.to_string());
                Err(e.into())
            }
        }
    }

    fn leave(&mut self, ctx: &PageContext, route: Route) {
        ctx.navigator.push(route.clone());
        self.redirected = Some(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{journal, FakeApi};

    fn filled() -> NewJournalPage {
        let mut page = NewJournalPage::new();
        page.title = "T".to_string();
        page.content = "C".to_string();
        page.set_mood(Mood::Good);
        page
    }

    #[test]
    fn test_mood_defaults_to_okay() {
        assert_eq!(NewJournalPage::new().mood(), Mood::Okay);
    }

    #[tokio::test]
    async fn test_create_opens_new_entry() {
        let h = FakeApi::new()
            .with_created(ApiResponse::Success(journal("new-1", "T")))
            .harness();
        h.sign_in("Ada");
        let mut page = filled();

        let id = page.submit(&h.ctx).await.unwrap();

        assert_eq!(id.as_deref(), Some("new-1"));
        assert_eq!(h.history.current(), Route::JournalDetail("new-1".to_string()));
        assert_eq!(
            page.entry(),
            NewJournal {
                title: "T".to_string(),
                content: "C".to_string(),
                mood: Mood::Good,
            }
        );
    }

    #[tokio::test]
    async fn test_second_submit_after_create_is_ignored() {
        let h = FakeApi::new()
            .with_created(ApiResponse::Success(journal("new-1", "T")))
            .harness();
        h.sign_in("Ada");
        let mut page = filled();

        assert!(page.submit(&h.ctx).await.unwrap().is_some());
        assert_eq!(
            page.redirected(),
            Some(&Route::JournalDetail("new-1".to_string()))
        );

        assert!(page.submit(&h.ctx).await.unwrap().is_none());
        assert_eq!(h.api.calls().len(), 1);
        assert_eq!(h.history.navigations(), 1);
    }

    #[tokio::test]
    async fn test_no_token_redirects_without_calling_api() {
        let h = FakeApi::new()
            .with_created(ApiResponse::Success(journal("new-1", "T")))
            .harness();
        let mut page = filled();

        assert!(page.submit(&h.ctx).await.unwrap().is_none());
        assert_eq!(h.history.current(), Route::Login);
        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let h = FakeApi::new()
            .with_created(ApiResponse::Failure { message: None })
            .harness();
        h.sign_in("Ada");
        let mut page = filled();

        assert!(page.submit(&h.ctx).await.unwrap().is_none());
        assert_eq!(page.error(), Some(CREATE_FAILED));
        assert_eq!(page.title, "T");
        assert_eq!(page.mood(), Mood::Good);
        assert_eq!(h.history.navigations(), 0);
    }

    #[tokio::test]
    async fn test_blank_title_rejected_locally() {
        let h = FakeApi::new().harness();
        h.sign_in("Ada");
        let mut page = filled();
        page.title = "   ".to_string();

        assert!(page.submit(&h.ctx).await.unwrap().is_none());
        assert_eq!(page.error(), Some("Title is required"));
        assert!(h.api.calls().is_empty());
    }

    #[test]
    fn test_dictation_appends() {
        let mut page = NewJournalPage::new();
        page.append_transcript("Slept well");
        page.append_transcript("then went running");
        assert_eq!(page.content, "Slept well then went running");
    }

    #[test]
    fn test_dictation_unsupported_is_notice() {
        let mut page = filled();
        assert!(!page.toggle_dictation(None));
        assert!(page.dictation().notice().is_some());
        assert!(page.error().is_none());
        assert_eq!(page.content, "C");
    }
}
