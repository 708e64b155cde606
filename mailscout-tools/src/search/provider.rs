//! Tavily search provider client.
//!
//! The provider is treated as a black-box capability: given a query and a
//! result count it returns zero or more raw records. Failures (network,
//! auth, rate limits, malformed responses) are mapped onto
//! [`ProviderError`] and never swallowed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::error::ProviderError;
use super::types::RawSearchResult;

/// Timeout imposed on a single provider round trip.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(15);

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

/// Depth setting sent with every request; "advanced" asks Tavily for full
/// page content rather than pre-digested summaries.
const SEARCH_DEPTH: &str = "advanced";

/// An external web search capability.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one search and return the raw result records, in provider order.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RawSearchResult>, ProviderError>;
}

/// HTTP client for the Tavily search API.
pub struct TavilyClient {
    client: Client,
    api_key: String,
}

impl TavilyClient {
    /// Create a client with the given API credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .user_agent(concat!("mailscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    raw_content: Option<String>,
}

impl TavilyResult {
    /// Prefer the full page text when the provider includes it; fall back to
    /// the pre-digested snippet.
    fn into_raw(self) -> RawSearchResult {
        RawSearchResult {
            title: self.title,
            url: self.url,
            content: self.raw_content.or(self.content),
        }
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RawSearchResult>, ProviderError> {
        tracing::debug!(query, max_results, "dispatching Tavily search");

        let body = serde_json::json!({
            "query": query,
            "max_results": max_results,
            "search_depth": SEARCH_DEPTH,
            "include_answer": true,
            "include_raw_content": true,
        });

        let response = self
            .client
            .post(TAVILY_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(PROVIDER_TIMEOUT)
                } else if e.is_connect() {
                    ProviderError::Network(format!("connection failed: {e}"))
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: TavilyResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        tracing::debug!(results = parsed.results.len(), "Tavily search completed");

        Ok(parsed
            .results
            .into_iter()
            .map(TavilyResult::into_raw)
            .collect())
    }
}
