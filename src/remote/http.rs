//! HTTP quote source backed by reqwest

use crate::remote::{parse_quote, FetchError, QuoteSource};
use crate::types::config::AppConfig;
use crate::types::quote::Quote;
use async_trait::async_trait;
use std::time::Duration;

/// Fetches quotes from a JSON endpoint with a plain GET
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        Self::from_builder(config, client_builder(config))
    }

    fn from_builder(config: &AppConfig, builder: reqwest::ClientBuilder) -> Result<Self, FetchError> {
        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Client settings taken from config
fn client_builder(config: &AppConfig) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(config.user_agent.clone())
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_random_quote(&self) -> Result<Quote, FetchError> {
        tracing::debug!("Fetching quote from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_quote(&body)
    }
}
