//! Remote quote source
//!
//! The fetcher contract and the JSON shape returned by the quote API.

pub mod http;

use crate::types::quote::Quote;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpQuoteSource;

/// Fetch errors. The `Display` form is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Could not reach the quote service: {0}")]
    Transport(String),
    #[error("The quote service answered with status {0}")]
    Status(u16),
    #[error("The quote service sent an unexpected response: {0}")]
    Decode(String),
    #[error("The quote service sent an empty quote")]
    EmptyQuote,
}

/// Anything that can hand out a random quote
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_random_quote(&self) -> Result<Quote, FetchError>;
}

/// Stands in when the HTTP client could not be built; every fetch reports
/// the construction error.
pub struct UnavailableSource(pub FetchError);

#[async_trait]
impl QuoteSource for UnavailableSource {
    async fn fetch_random_quote(&self) -> Result<Quote, FetchError> {
        Err(self.0.clone())
    }
}

/// Body returned by the quote API
#[derive(Debug, Deserialize)]
struct RemoteQuote {
    id: Value,
    quote: String,
    #[serde(default)]
    author: Option<String>,
}

impl RemoteQuote {
    fn into_quote(self) -> Result<Quote, FetchError> {
        let id = match self.id {
            Value::String(s) if !s.trim().is_empty() => s,
            Value::Number(n) => n.to_string(),
            other => return Err(FetchError::Decode(format!("unusable id {}", other))),
        };
        if self.quote.trim().is_empty() {
            return Err(FetchError::EmptyQuote);
        }
        Ok(Quote {
            id,
            content: self.quote,
            author: self.author.unwrap_or_default(),
        })
    }
}

/// Turn a response body into a [`Quote`]
pub fn parse_quote(body: &str) -> Result<Quote, FetchError> {
    let remote: RemoteQuote =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    remote.into_quote()
}
