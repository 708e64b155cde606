//! Core types for search queries and results.

use serde::{Deserialize, Serialize};

/// Default number of results requested from the provider.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Upper bound on the number of results a single query may request.
/// Tavily caps a request at 20 results.
pub const MAX_RESULTS_LIMIT: usize = 20;

/// A validated-on-use search request. Created per invocation, immutable,
/// discarded once the call completes.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// The query text sent verbatim to the provider.
    pub text: String,
    /// Number of result records to request.
    pub max_results: usize,
}

impl SearchQuery {
    /// Create a query with the default result count.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Override the requested result count.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// A raw result record as returned by the provider. Owned transiently by the
/// orchestrator for the duration of one call; never persisted.
#[derive(Debug, Clone, Default)]
pub struct RawSearchResult {
    /// Page title reported by the provider.
    pub title: String,
    /// Result URL.
    pub url: String,
    /// Raw page content, when the provider has it.
    pub content: Option<String>,
}

/// A normalized result record: the raw record with its content reduced to a
/// bounded, boilerplate-free, URL-free snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Page title, passed through from the provider.
    pub title: String,
    /// Result URL, passed through from the provider.
    pub url: String,
    /// Cleaned excerpt of the page content; may be empty.
    pub snippet: String,
}

/// The sole externally visible artifact of a search call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Bounded summary aggregating the snippets of all results, or the
    /// no-results placeholder.
    pub summary: String,
    /// Normalized records in provider order.
    pub results: Vec<SearchRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults() {
        let query = SearchQuery::new("email marketing trends 2026");
        assert_eq!(query.text, "email marketing trends 2026");
        assert_eq!(query.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn query_with_max_results() {
        let query = SearchQuery::new("subject lines").with_max_results(3);
        assert_eq!(query.max_results, 3);
    }

    #[test]
    fn outcome_serde_round_trip() {
        let outcome = SearchOutcome {
            summary: "summary text".into(),
            results: vec![SearchRecord {
                title: "Example".into(),
                url: "https://example.com".into(),
                snippet: "snippet".into(),
            }],
        };
        let json = serde_json::to_string(&outcome).expect("serialize");
        let decoded: SearchOutcome = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.summary, "summary text");
        assert_eq!(decoded.results.len(), 1);
        assert_eq!(decoded.results[0].url, "https://example.com");
    }
}
