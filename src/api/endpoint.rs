//! Backend operations
//!
//! Each [`Endpoint`] is one request: a fixed method and path, whether it
//! needs the bearer token, and an optional JSON body.

use reqwest::Method;
use serde_json::{json, Value};

use crate::journal::NewJournal;

/// One backend operation with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Register {
        name: String,
        email: String,
        password: String,
    },
    Login {
        email: String,
        password: String,
    },
    ListJournals,
    GetJournal {
        id: String,
    },
    CreateJournal(NewJournal),
    DeleteJournal {
        id: String,
    },
    AnalyzeJournal {
        id: String,
    },
    WeeklyInsights,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListJournals | Endpoint::GetJournal { .. } => Method::GET,
            Endpoint::DeleteJournal { .. } => Method::DELETE,
            Endpoint::Register { .. }
            | Endpoint::Login { .. }
            | Endpoint::CreateJournal(_)
            | Endpoint::AnalyzeJournal { .. }
            | Endpoint::WeeklyInsights => Method::POST,
        }
    }

    /// Path relative to the API base, identifiers percent-encoded
    pub fn path(&self) -> String {
        match self {
            Endpoint::Register { .. } => "/auth/register".to_string(),
            Endpoint::Login { .. } => "/auth/login".to_string(),
            Endpoint::ListJournals | Endpoint::CreateJournal(_) => "/journals".to_string(),
            Endpoint::GetJournal { id } | Endpoint::DeleteJournal { id } => {
                format!("/journals/{}", urlencoding::encode(id))
            }
            Endpoint::AnalyzeJournal { id } => {
                format!("/journals/{}/analyze", urlencoding::encode(id))
            }
            Endpoint::WeeklyInsights => "/journals/insights".to_string(),
        }
    }

    /// Whether the request carries `Authorization: Bearer <token>`
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Register { .. } | Endpoint::Login { .. })
    }

    /// JSON request body, for write operations that send one
    pub fn body(&self) -> Option<Value> {
        match self {
            Endpoint::Register {
                name,
                email,
                password,
            } => Some(json!({ "name": name, "email": email, "password": password })),
            Endpoint::Login { email, password } => {
                Some(json!({ "email": email, "password": password }))
            }
            Endpoint::CreateJournal(entry) => Some(json!({
                "title": entry.title,
                "content": entry.content,
                "mood": entry.mood,
            })),
            _ => None,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Register { .. } => "register",
            Endpoint::Login { .. } => "login",
            Endpoint::ListJournals => "list_journals",
            Endpoint::GetJournal { .. } => "get_journal",
            Endpoint::CreateJournal(_) => "create_journal",
            Endpoint::DeleteJournal { .. } => "delete_journal",
            Endpoint::AnalyzeJournal { .. } => "analyze_journal",
            Endpoint::WeeklyInsights => "weekly_insights",
        }
    }
}
