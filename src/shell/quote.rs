//! Quote of the Day
//!
//! Best-effort fetch from ZenQuotes. Every failure, and a missing source,
//! resolves to the fixed fallback quote.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Default quote service endpoint
pub const ZENQUOTES_URL: &str = "https://zenquotes.io/api/today";

/// Credit link shown under the quote
pub const ZENQUOTES_CREDIT: &str = "https://zenquotes.io/";

/// Credit link text
pub const ZENQUOTES_CREDIT_LABEL: &str = "ZenQuotes.io";

/// Heading of the quote panel
pub const QUOTE_LABEL: &str = "Quote of the Day";

/// A quote and its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// Shown whenever the service cannot be used
    pub fn fallback() -> Self {
        Self {
            text: "Every day is a fresh start.".to_string(),
            author: "Unknown".to_string(),
        }
    }
}

/// Errors fetching a quote
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Quote request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Quote service returned no quote")]
    Empty,
}

/// A source of daily quotes
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn quote_of_the_day(&self) -> Result<Quote, QuoteError>;
}

/// ZenQuotes `today` endpoint client
pub struct ZenQuotesClient {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    a: String,
}

impl ZenQuotesClient {
    pub fn new(url: &str) -> Result<Self, QuoteError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl QuoteSource for ZenQuotesClient {
    async fn quote_of_the_day(&self) -> Result<Quote, QuoteError> {
        let quotes: Vec<ZenQuote> = self.client.get(&self.url).send().await?.json().await?;

        quotes
            .into_iter()
            .next()
            .filter(|q| !q.q.trim().is_empty())
            .map(|q| Quote {
                text: q.q,
                author: q.a,
            })
            .ok_or(QuoteError::Empty)
    }
}

/// Resolve today's quote, substituting the fallback on any failure
pub async fn load_quote(source: Option<&dyn QuoteSource>) -> Quote {
    let Some(source) = source else {
        return Quote::fallback();
    };

    match source.quote_of_the_day().await {
        Ok(quote) => quote,
        Err(e) => {
            tracing::warn!(error = %e, "Quote of the day unavailable, using fallback");
            Quote::fallback()
        }
    }
}
