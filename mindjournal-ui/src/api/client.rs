//! HTTP API Client
//!
//! One function per backend operation. Bodies are read the same way whatever
//! the HTTP status: each operation checks for the field it promises on
//! success and reports anything else as [`ApiResponse::Failure`].

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::{AuthPayload, Journal, NewJournal};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:4000/api";

const API_BASE_KEY: &str = "mindjournal_api_url";

/// Quote of the day endpoint
pub const QUOTE_URL: &str = "https://zenquotes.io/api/today";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

/// Outcome of a backend operation
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure { message: Option<String> },
}

impl<T> ApiResponse<T> {
    /// Backend message, or `default` when it sent none
    pub fn message_or(&self, default: &str) -> Option<String> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure { message } => {
                Some(message.clone().unwrap_or_else(|| default.to_string()))
            }
        }
    }
}

fn text_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Tag a body as success when `is_success` holds
pub fn discriminate<T: DeserializeOwned>(
    body: Value,
    is_success: impl FnOnce(&Value) -> bool,
) -> Result<ApiResponse<T>, String> {
    if !is_success(&body) {
        return Ok(ApiResponse::Failure {
            message: text_field(&body, "message").map(str::to_string),
        });
    }
    serde_json::from_value(body)
        .map(ApiResponse::Success)
        .map_err(|e| format!("Unexpected response: {}", e))
}

fn has_message(body: &Value) -> bool {
    text_field(body, "message").is_some()
}

fn url(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

fn journal_url(id: &str, suffix: &str) -> String {
    let id: String = js_sys::encode_uri_component(id).into();
    url(&format!("/journals/{}{}", id, suffix))
}

fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

async fn read(request: Request) -> Result<Value, String> {
    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    response
        .json::<Value>()
        .await
        .map_err(|e| format!("HTTP {}: {}", status, e))
}

async fn send(builder: RequestBuilder) -> Result<Value, String> {
    let request = builder.build().map_err(|e| e.to_string())?;
    read(request).await
}

async fn send_json(builder: RequestBuilder, body: &Value) -> Result<Value, String> {
    let request = builder.json(body).map_err(|e| e.to_string())?;
    read(request).await
}

// ============ Auth ============

pub async fn register(
    name: &str,
    email: &str,
    password: &str,
) -> Result<ApiResponse<AuthPayload>, String> {
    let body = json!({"name": name, "email": email, "password": password});
    let value = send_json(Request::post(&url("/auth/register")), &body).await?;
    discriminate(value, |b| text_field(b, "token").is_some())
}

pub async fn login(email: &str, password: &str) -> Result<ApiResponse<AuthPayload>, String> {
    let body = json!({"email": email, "password": password});
    let value = send_json(Request::post(&url("/auth/login")), &body).await?;
    discriminate(value, |b| text_field(b, "token").is_some())
}

// ============ Journals ============

pub async fn fetch_journals(token: &str) -> Result<ApiResponse<Vec<Journal>>, String> {
    let value = send(bearer(Request::get(&url("/journals")), token)).await?;
    discriminate(value, Value::is_array)
}

pub async fn fetch_journal(id: &str, token: &str) -> Result<ApiResponse<Journal>, String> {
    let value = send(bearer(Request::get(&journal_url(id, "")), token)).await?;
    discriminate(value, |b| b.is_object() && !has_message(b))
}

pub async fn create_journal(
    entry: &NewJournal,
    token: &str,
) -> Result<ApiResponse<Journal>, String> {
    let body = serde_json::to_value(entry).map_err(|e| e.to_string())?;
    let value = send_json(bearer(Request::post(&url("/journals")), token), &body).await?;
    discriminate(value, |b| text_field(b, "_id").is_some())
}

pub async fn delete_journal(id: &str, token: &str) -> Result<ApiResponse<Value>, String> {
    let value = send(bearer(Request::delete(&journal_url(id, "")), token)).await?;
    discriminate(value, |b| !has_message(b))
}

pub async fn analyze_journal(id: &str, token: &str) -> Result<ApiResponse<Journal>, String> {
    let value = send(bearer(Request::post(&journal_url(id, "/analyze")), token)).await?;
    discriminate(value, |b| text_field(b, "analysis").is_some())
}

pub async fn weekly_insights(token: &str) -> Result<ApiResponse<String>, String> {
    let value = send(bearer(Request::post(&url("/journals/insights")), token)).await?;
    Ok(match text_field(&value, "insights") {
        Some(text) => ApiResponse::Success(text.to_string()),
        None => ApiResponse::Failure {
            message: text_field(&value, "message").map(str::to_string),
        },
    })
}

// ============ Quote ============

/// Quote of the day
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn fallback() -> Self {
        Self {
            text: "Every day is a fresh start.".to_string(),
            author: "Unknown".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ZenQuote {
    q: String,
    a: String,
}

/// Fetch today's quote, falling back on any failure
pub async fn fetch_quote() -> Quote {
    let quote = async {
        let response = Request::get(QUOTE_URL).send().await.map_err(|e| e.to_string())?;
        let quotes: Vec<ZenQuote> = response.json().await.map_err(|e| e.to_string())?;
        quotes
            .into_iter()
            .next()
            .filter(|q| !q.q.trim().is_empty())
            .map(|q| Quote {
                text: q.q,
                author: q.a,
            })
            .ok_or_else(|| "empty quote response".to_string())
    };

    match quote.await {
        Ok(quote) => quote,
        Err(e) => {
            web_sys::console::warn_1(&format!("Quote unavailable: {}", e).into());
            Quote::fallback()
        }
    }
}
