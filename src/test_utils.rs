//! Scripted API double for page tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::api::{ApiClientError, ApiClientResult, ApiResponse, JournalApi};
use crate::journal::{AuthPayload, Journal, Mood, NewJournal, User};
use crate::pages::PageContext;
use crate::router::History;
use crate::session::{SessionContext, SessionStore};

/// An API call as the fake saw it
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: &'static str,
    pub token: Option<String>,
}

/// [`JournalApi`] returning canned responses and recording calls
///
/// Unscripted operations answer `Failure { message: "unscripted" }`.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    offline: bool,
    auth: Option<ApiResponse<AuthPayload>>,
    journals: Option<ApiResponse<Vec<Journal>>>,
    journal: Option<ApiResponse<Journal>>,
    created: Option<ApiResponse<Journal>>,
    deleted: Option<ApiResponse<Value>>,
    analyzed: Option<ApiResponse<Journal>>,
    insights: Option<ApiResponse<String>>,
}

/// A page context wired to a fake API and a recording navigator
pub struct Harness {
    pub ctx: PageContext,
    pub api: Arc<FakeApi>,
    pub history: Arc<History>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the backend sent garbage
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn with_auth(mut self, response: ApiResponse<AuthPayload>) -> Self {
        self.auth = Some(response);
        self
    }

    pub fn with_journals(mut self, response: ApiResponse<Vec<Journal>>) -> Self {
        self.journals = Some(response);
        self
    }

    pub fn with_journal(mut self, response: ApiResponse<Journal>) -> Self {
        self.journal = Some(response);
        self
    }

    pub fn with_created(mut self, response: ApiResponse<Journal>) -> Self {
        self.created = Some(response);
        self
    }

    pub fn with_deleted(mut self, response: ApiResponse<Value>) -> Self {
        self.deleted = Some(response);
        self
    }

    pub fn with_analyzed(mut self, response: ApiResponse<Journal>) -> Self {
        self.analyzed = Some(response);
        self
    }

    pub fn with_insights(mut self, response: ApiResponse<String>) -> Self {
        self.insights = Some(response);
        self
    }

    pub fn harness(self) -> Harness {
        let api = Arc::new(self);
        let history = Arc::new(History::default());
        let ctx = PageContext::new(
            SessionContext::new(SessionStore::in_memory()),
            api.clone(),
            history.clone(),
        );
        Harness { ctx, api, history }
    }

    pub fn context(self) -> (PageContext, Arc<History>) {
        let harness = self.harness();
        (harness.ctx, harness.history)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ops(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|c| c.op).collect()
    }

    fn answer<T: Clone>(
        &self,
        op: &'static str,
        token: Option<&str>,
        scripted: &Option<ApiResponse<T>>,
    ) -> ApiClientResult<ApiResponse<T>> {
        self.calls.lock().unwrap().push(Call {
            op,
            token: token.map(str::to_string),
        });
        if self.offline {
            return Err(ApiClientError::Decode {
                status: 502,
                reason: "expected value at line 1 column 1".to_string(),
            });
        }
        Ok(scripted.clone().unwrap_or(ApiResponse::Failure {
            message: Some("unscripted".to_string()),
        }))
    }
}

impl Harness {
    /// Store a session as a successful login would
    pub fn sign_in(&self, name: &str) {
        self.ctx.session.write("tok-123", &User::new(name)).unwrap();
    }
}

#[async_trait]
impl JournalApi for FakeApi {
    async fn register(
        &self,
        _name: &str,
        _email: &str,
        _password: &str,
    ) -> ApiClientResult<ApiResponse<AuthPayload>> {
        self.answer("register", None, &self.auth)
    }

    async fn login(&self, _email: &str, _password: &str) -> ApiClientResult<ApiResponse<AuthPayload>> {
        self.answer("login", None, &self.auth)
    }

    async fn list_journals(&self, token: &str) -> ApiClientResult<ApiResponse<Vec<Journal>>> {
        self.answer("list_journals", Some(token), &self.journals)
    }

    async fn get_journal(&self, _id: &str, token: &str) -> ApiClientResult<ApiResponse<Journal>> {
        self.answer("get_journal", Some(token), &self.journal)
    }

    async fn create_journal(
        &self,
        _entry: &NewJournal,
        token: &str,
    ) -> ApiClientResult<ApiResponse<Journal>> {
        self.answer("create_journal", Some(token), &self.created)
    }

    async fn delete_journal(
        &self,
        _id: &str,
        token: &str,
    ) -> ApiClientResult<ApiResponse<Value>> {
        self.answer("delete_journal", Some(token), &self.deleted)
    }

    async fn analyze_journal(&self, _id: &str, token: &str) -> ApiClientResult<ApiResponse<Journal>> {
        self.answer("analyze_journal", Some(token), &self.analyzed)
    }

    async fn weekly_insights(&self, token: &str) -> ApiClientResult<ApiResponse<String>> {
        self.answer("weekly_insights", Some(token), &self.insights)
    }
}

/// An entry as the backend returns it
pub fn journal(id: &str, title: &str) -> Journal {
    Journal {
        id: id.to_string(),
        title: title.to_string(),
        content: "Walked by the river.".to_string(),
        mood: Mood::Good,
        analysis: None,
        created_at: Utc.with_ymd_and_hms(2025, 3, 4, 10, 15, 0).unwrap(),
    }
}

pub fn auth(token: &str, name: &str) -> AuthPayload {
    AuthPayload {
        token: token.to_string(),
        user: User::new(name),
    }
}
