//! Journal API Client
//!
//! Client side of the journal backend.
//!
//! # Operations
//!
//! | Operation | Request | Success when |
//! |---|---|---|
//! | register | `POST /auth/register` | body has `token` |
//! | login | `POST /auth/login` | body has `token` |
//! | list journals | `GET /journals` | body is an array |
//! | get journal | `GET /journals/:id` | no `message` |
//! | create journal | `POST /journals` | body has `_id` |
//! | delete journal | `DELETE /journals/:id` | no `message` |
//! | analyze journal | `POST /journals/:id/analyze` | body has `analysis` |
//! | weekly insights | `POST /journals/insights` | body has `insights` |
//!
//! All but register and login send `Authorization: Bearer <token>`.
//!
//! # Example
//!
//! ```rust,no_run
//! use mindjournal::api::{ApiResponse, HttpApiClient, JournalApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpApiClient::new("http://localhost:4000/api")?;
//!
//!     match api.login("ada@example.com", "secret").await? {
//!         ApiResponse::Success(auth) => println!("Welcome back, {}", auth.user.name),
//!         ApiResponse::Failure { message } => println!("{}", message.unwrap_or_default()),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod response;

pub use client::{HttpApiClient, DEFAULT_API_BASE};
pub use endpoint::Endpoint;
pub use error::{ApiClientError, ApiClientResult};
pub use response::{message_of, ApiResponse, RawResponse};

use async_trait::async_trait;

use crate::journal::{AuthPayload, Journal, NewJournal};

/// The backend operations pages depend on
#[async_trait]
pub trait JournalApi: Send + Sync {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ApiClientResult<ApiResponse<AuthPayload>>;

    async fn login(&self, email: &str, password: &str) -> ApiClientResult<ApiResponse<AuthPayload>>;

    async fn list_journals(&self, token: &str) -> ApiClientResult<ApiResponse<Vec<Journal>>>;

    async fn get_journal(&self, id: &str, token: &str) -> ApiClientResult<ApiResponse<Journal>>;

    async fn create_journal(
        &self,
        entry: &NewJournal,
        token: &str,
    ) -> ApiClientResult<ApiResponse<Journal>>;

    async fn delete_journal(
        &self,
        id: &str,
        token: &str,
    ) -> ApiClientResult<ApiResponse<serde_json::Value>>;

    async fn analyze_journal(&self, id: &str, token: &str) -> ApiClientResult<ApiResponse<Journal>>;

    async fn weekly_insights(&self, token: &str) -> ApiClientResult<ApiResponse<String>>;
}
