//! In-process stub of the journal backend
//!
//! Mirrors the real backend's contract: JSON bodies on every path, a
//! `message` field on failures, and bearer tokens on journal routes.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mindjournal::pages::PageContext;
use mindjournal::{History, HttpApiClient, SessionContext, SessionStore};

pub const TOKEN: &str = "tok-1";
pub const PASSWORD: &str = "secret";
pub const ANALYSIS: &str = "It sounds like you had a meaningful day.";

/// A request as the stub received it
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Default)]
pub struct StubState {
    journals: Mutex<Vec<Value>>,
    seen: Mutex<Vec<Seen>>,
    next_id: AtomicUsize,
}

impl StubState {
    pub fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn journal_count(&self) -> usize {
        self.journals.lock().unwrap().len()
    }

    fn record(&self, method: Method, uri: &Uri, headers: &HeaderMap) {
        let text = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.seen.lock().unwrap().push(Seen {
            method,
            path: uri.path().to_string(),
            authorization: text(header::AUTHORIZATION),
            content_type: text(header::CONTENT_TYPE),
        });
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        let expected = format!("Bearer {}", TOKEN);
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            == Some(expected.as_str())
    }
}

pub struct StubBackend {
    /// Base URL including the `/api` prefix
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl StubBackend {
    pub async fn spawn() -> Self {
        let state = Arc::new(StubState::default());
        let app = Router::new()
            .route("/api/auth/register", post(register))
            .route("/api/auth/login", post(login))
            .route("/api/journals", get(list_journals).post(create_journal))
            .route("/api/journals/insights", post(weekly_insights))
            .route("/api/journals/:id", get(get_journal).delete(delete_journal))
            .route("/api/journals/:id/analyze", post(analyze_journal))
            .fallback(not_json)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    pub fn client(&self) -> HttpApiClient {
        HttpApiClient::new(&self.base_url).unwrap()
    }

    /// Page context over a fresh in-memory session
    pub fn context(&self) -> (PageContext, Arc<History>) {
        self.context_with(SessionContext::new(SessionStore::in_memory()))
    }

    pub fn context_with(&self, session: SessionContext) -> (PageContext, Arc<History>) {
        let history = Arc::new(History::default());
        let ctx = PageContext::new(session, Arc::new(self.client()), history.clone());
        (ctx, history)
    }
}

type Reply = (StatusCode, Json<Value>);

fn unauthorized() -> Reply {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Not authorized"})),
    )
}

fn not_found() -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Journal not found"})),
    )
}

async fn register(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    state.record(method, &uri, &headers);
    let name = body["name"].as_str().unwrap_or_default();
    let email = body["email"].as_str().unwrap_or_default();
    if email == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "User already exists"})),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({"token": TOKEN, "user": {"id": "u1", "name": name, "email": email}})),
    )
}

async fn login(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    state.record(method, &uri, &headers);
    if body["password"] != PASSWORD {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Invalid credentials"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "token": TOKEN,
            "user": {"id": "u1", "name": "Ada", "email": body["email"]}
        })),
    )
}

async fn list_journals(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Reply {
    state.record(method, &uri, &headers);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let journals = state.journals.lock().unwrap().clone();
    (StatusCode::OK, Json(Value::Array(journals)))
}

async fn create_journal(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    state.record(method, &uri, &headers);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    if body["title"].as_str().map_or(true, str::is_empty) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Title is required"})),
        );
    }

    let id = format!("j{}", state.next_id.fetch_add(1, Ordering::SeqCst) + 1);
    let entry = json!({
        "_id": id,
        "title": body["title"],
        "content": body["content"],
        "mood": body["mood"],
        "analysis": null,
        "user": "u1",
        "createdAt": chrono::Utc::now().to_rfc3339(),
    });
    state.journals.lock().unwrap().push(entry.clone());
    (StatusCode::CREATED, Json(entry))
}

async fn get_journal(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Reply {
    state.record(method, &uri, &headers);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let journals = state.journals.lock().unwrap();
    match journals.iter().find(|j| j["_id"] == id.as_str()) {
        Some(entry) => (StatusCode::OK, Json(entry.clone())),
        None => not_found(),
    }
}

async fn delete_journal(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Reply {
    state.record(method, &uri, &headers);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let mut journals = state.journals.lock().unwrap();
    let before = journals.len();
    journals.retain(|j| j["_id"] != id.as_str());
    if journals.len() == before {
        return not_found();
    }
    (StatusCode::OK, Json(json!({"deleted": true, "_id": id})))
}

async fn analyze_journal(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Reply {
    state.record(method, &uri, &headers);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let mut journals = state.journals.lock().unwrap();
    match journals.iter_mut().find(|j| j["_id"] == id.as_str()) {
        Some(entry) => {
            entry["analysis"] = json!(ANALYSIS);
            (StatusCode::OK, Json(entry.clone()))
        }
        None => not_found(),
    }
}

async fn weekly_insights(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Reply {
    state.record(method, &uri, &headers);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let count = state.journals.lock().unwrap().len();
    if count == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "No journal entries this week"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"insights": format!("You wrote {} entries this week.", count)})),
    )
}

async fn not_json(method: Method, uri: Uri) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("<html>Cannot {} {}</html>", method, uri.path()),
    )
}
