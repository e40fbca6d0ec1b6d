//! Journal API HTTP Client
//!
//! reqwest client for the journal backend. Every call is a single request:
//! no retries, no client-side timeout, and the body is parsed whatever the
//! status code.

use async_trait::async_trait;
use reqwest::{header, Client, Url};

use super::endpoint::Endpoint;
use super::error::{ApiClientError, ApiClientResult};
use super::response::{ApiResponse, RawResponse};
use super::JournalApi;
use crate::journal::{AuthPayload, Journal, NewJournal};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:4000/api";

/// HTTP client for the journal backend
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for `base_url` (e.g. "http://localhost:4000/api")
    pub fn new(base_url: &str) -> ApiClientResult<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .user_agent(concat!("mindjournal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one operation and return the parsed body verbatim
    pub async fn execute(
        &self,
        endpoint: &Endpoint,
        token: Option<&str>,
    ) -> ApiClientResult<RawResponse> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        tracing::debug!(op = endpoint.name(), method = %endpoint.method(), %url, "API request");

        let mut request = self.client.request(endpoint.method(), &url);
        if endpoint.requires_auth() {
            if let Some(token) = token {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = endpoint.body() {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        let body = serde_json::from_slice(&bytes).map_err(|e| ApiClientError::Decode {
            status,
            reason: e.to_string(),
        })?;

        tracing::debug!(op = endpoint.name(), status, "API response");
        Ok(RawResponse { status, body })
    }
}

/// Trim trailing slashes and check the URL is absolute http(s)
fn normalize_base_url(raw: &str) -> ApiClientResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ApiClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(invalid(format!("unsupported scheme {}", other))),
    }
}

#[async_trait]
impl JournalApi for HttpApiClient {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ApiClientResult<ApiResponse<AuthPayload>> {
        let endpoint = Endpoint::Register {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute(&endpoint, None).await?.into_auth()
    }

    async fn login(&self, email: &str, password: &str) -> ApiClientResult<ApiResponse<AuthPayload>> {
        let endpoint = Endpoint::Login {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute(&endpoint, None).await?.into_auth()
    }

    async fn list_journals(&self, token: &str) -> ApiClientResult<ApiResponse<Vec<Journal>>> {
        self.execute(&Endpoint::ListJournals, Some(token))
            .await?
            .into_journal_list()
    }

    async fn get_journal(&self, id: &str, token: &str) -> ApiClientResult<ApiResponse<Journal>> {
        let endpoint = Endpoint::GetJournal { id: id.to_string() };
        self.execute(&endpoint, Some(token)).await?.into_journal()
    }

    async fn create_journal(
        &self,
        entry: &NewJournal,
        token: &str,
    ) -> ApiClientResult<ApiResponse<Journal>> {
        let endpoint = Endpoint::CreateJournal(entry.clone());
        self.execute(&endpoint, Some(token)).await?.into_created()
    }

    async fn delete_journal(
        &self,
        id: &str,
        token: &str,
    ) -> ApiClientResult<ApiResponse<serde_json::Value>> {
        let endpoint = Endpoint::DeleteJournal { id: id.to_string() };
        self.execute(&endpoint, Some(token)).await?.into_ack()
    }

    async fn analyze_journal(&self, id: &str, token: &str) -> ApiClientResult<ApiResponse<Journal>> {
        let endpoint = Endpoint::AnalyzeJournal { id: id.to_string() };
        self.execute(&endpoint, Some(token)).await?.into_analyzed()
    }

    async fn weekly_insights(&self, token: &str) -> ApiClientResult<ApiResponse<String>> {
        self.execute(&Endpoint::WeeklyInsights, Some(token))
            .await?
            .into_insights()
    }
}
