//! Response discrimination
//!
//! The backend is read the same way whatever the HTTP status: the parsed
//! body is inspected for the field each operation promises on success. This
//! module turns that field check into a tag, [`ApiResponse`], so callers
//! never re-check ad hoc fields.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::{ApiClientError, ApiClientResult};
use crate::journal::{AuthPayload, Journal};

/// A parsed body with the status it arrived with
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// Outcome of a backend operation
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    /// The body lacked the success field; `message` is the backend's text
    Failure { message: Option<String> },
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(value) => ApiResponse::Success(f(value)),
            ApiResponse::Failure { message } => ApiResponse::Failure { message },
        }
    }

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

/// Non-empty string field
fn text_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// The backend's `message`, if any
pub fn message_of(body: &Value) -> Option<String> {
    text_field(body, "message").map(str::to_string)
}

impl RawResponse {
    /// Decode as `T` when `is_success` holds, otherwise a failure
    fn discriminate<T: DeserializeOwned>(
        self,
        is_success: impl FnOnce(&Value) -> bool,
    ) -> ApiClientResult<ApiResponse<T>> {
        if !is_success(&self.body) {
            return Ok(ApiResponse::Failure {
                message: message_of(&self.body),
            });
        }

        let status = self.status;
        serde_json::from_value(self.body)
            .map(ApiResponse::Success)
            .map_err(|e| ApiClientError::Decode {
                status,
                reason: e.to_string(),
            })
    }

    /// login / register: success carries a `token`
    pub fn into_auth(self) -> ApiClientResult<ApiResponse<AuthPayload>> {
        self.discriminate(|body| text_field(body, "token").is_some())
    }

    /// list: success is an array
    pub fn into_journal_list(self) -> ApiClientResult<ApiResponse<Vec<Journal>>> {
        self.discriminate(Value::is_array)
    }

    /// get: anything but a `message` is the entry
    pub fn into_journal(self) -> ApiClientResult<ApiResponse<Journal>> {
        self.discriminate(|body| body.is_object() && message_of(body).is_none())
    }

    /// create: success carries the new `_id`
    pub fn into_created(self) -> ApiClientResult<ApiResponse<Journal>> {
        self.discriminate(|body| text_field(body, "_id").is_some())
    }

    /// analyze: success carries non-empty `analysis`
    pub fn into_analyzed(self) -> ApiClientResult<ApiResponse<Journal>> {
        self.discriminate(|body| text_field(body, "analysis").is_some())
    }

    /// delete: anything but a `message` is an acknowledgement
    pub fn into_ack(self) -> ApiClientResult<ApiResponse<Value>> {
        self.discriminate(|body| message_of(body).is_none())
    }

    /// weekly insights: success carries non-empty `insights`
    pub fn into_insights(self) -> ApiClientResult<ApiResponse<String>> {
        #[derive(Deserialize)]
        struct Insights {
            insights: String,
        }

        let response: ApiResponse<Insights> =
            self.discriminate(|body| text_field(body, "insights").is_some())?;
        Ok(response.map(|i| i.insights))
    }
}
