//! Search orchestrator: one provider round trip, then normalization.

use std::sync::Arc;

use super::error::SearchError;
use super::extract::extract_main_content;
use super::provider::SearchProvider;
use super::sanitize::sanitize;
use super::summary::{build_summary, NO_RESULTS_SUMMARY};
use super::types::{RawSearchResult, SearchOutcome, SearchQuery, SearchRecord, MAX_RESULTS_LIMIT};

/// Map one raw provider record into its normalized form.
///
/// Title and URL pass through unchanged; the snippet is the sanitized,
/// extracted content. Absent content degrades to an empty snippet, never an
/// error.
pub fn normalize(raw: RawSearchResult) -> SearchRecord {
    let snippet = extract_main_content(&sanitize(raw.content.as_deref().unwrap_or_default()));
    SearchRecord {
        title: raw.title,
        url: raw.url,
        snippet,
    }
}

/// Stateless search orchestrator. Holds the provider behind a trait object so
/// the tool layer and tests can inject their own; safe to share across
/// concurrent invocations.
pub struct Searcher {
    provider: Arc<dyn SearchProvider>,
}

impl Searcher {
    /// Create an orchestrator over the given provider.
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Run one search: validate, query the provider, normalize every record,
    /// and build a summary capped at `summary_cap` bytes.
    ///
    /// An empty provider result is a success with the no-results summary.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidQuery`] for an empty query text or an
    /// out-of-range result count; the provider is not contacted.
    /// [`SearchError::Provider`] when the provider round trip fails; no
    /// partial outcome is produced.
    pub async fn search(
        &self,
        query: &SearchQuery,
        summary_cap: usize,
    ) -> Result<SearchOutcome, SearchError> {
        validate(query)?;

        let raw = self
            .provider
            .search(query.text.trim(), query.max_results)
            .await?;

        if raw.is_empty() {
            tracing::info!(query = %query.text, "search returned no results");
            return Ok(SearchOutcome {
                summary: NO_RESULTS_SUMMARY.to_owned(),
                results: Vec::new(),
            });
        }

        let results: Vec<SearchRecord> = raw.into_iter().map(normalize).collect();
        let summary = build_summary(&results, summary_cap);

        tracing::info!(
            query = %query.text,
            results = results.len(),
            "search completed"
        );

        Ok(SearchOutcome { summary, results })
    }
}

fn validate(query: &SearchQuery) -> Result<(), SearchError> {
    if query.text.trim().is_empty() {
        return Err(SearchError::InvalidQuery(
            "search query cannot be empty".to_owned(),
        ));
    }
    if query.max_results == 0 {
        return Err(SearchError::InvalidQuery(
            "maxResults must be at least 1".to_owned(),
        ));
    }
    if query.max_results > MAX_RESULTS_LIMIT {
        return Err(SearchError::InvalidQuery(format!(
            "maxResults is {}, maximum is {MAX_RESULTS_LIMIT}",
            query.max_results
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::test_support::{long_record, searcher_with_records, StubProvider};
    use super::*;

    const CAP: usize = 3500;

    #[test]
    fn normalize_passes_title_and_url_through() {
        let record = normalize(long_record("Title", "https://example.com/a"));
        assert_eq!(record.title, "Title");
        assert_eq!(record.url, "https://example.com/a");
        assert!(!record.snippet.is_empty());
    }

    #[test]
    fn normalize_tolerates_missing_content() {
        let record = normalize(RawSearchResult {
            title: "T".into(),
            url: "u".into(),
            content: None,
        });
        assert_eq!(record.snippet, "");
    }

    #[test]
    fn normalize_strips_boilerplate_lines() {
        let raw = RawSearchResult {
            title: "T".into(),
            url: "u".into(),
            content: Some(
                "Navigation\nThis is a sufficiently long piece of real article content \
                 exceeding fifty characters in length for sure.\nFooter"
                    .into(),
            ),
        };
        let record = normalize(raw);
        assert_eq!(
            record.snippet,
            "This is a sufficiently long piece of real article content exceeding fifty \
             characters in length for sure."
        );
    }

    #[tokio::test]
    async fn preserves_provider_order_and_count() {
        let records = vec![
            long_record("first", "https://a.example"),
            long_record("second", "https://b.example"),
            long_record("third", "https://c.example"),
        ];
        let searcher = searcher_with_records(records);
        let query = SearchQuery::new("email marketing trends").with_max_results(3);

        let outcome = searcher.search(&query, CAP).await.expect("search succeeds");
        assert_eq!(outcome.results.len(), 3);
        let titles: Vec<&str> = outcome.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn empty_results_are_a_success_with_the_sentinel_summary() {
        let searcher = searcher_with_records(Vec::new());
        let query = SearchQuery::new("obscure query with no hits");

        let outcome = searcher.search(&query, CAP).await.expect("still a success");
        assert_eq!(outcome.summary, NO_RESULTS_SUMMARY);
        assert!(outcome.results.is_empty());
    }

    #[tokio::test]
    async fn summary_is_derived_from_snippets() {
        let searcher = searcher_with_records(vec![long_record("a", "https://a.example")]);
        let query = SearchQuery::new("anything");

        let outcome = searcher.search(&query, CAP).await.expect("search succeeds");
        assert_eq!(outcome.summary, outcome.results[0].snippet);
    }

    #[tokio::test]
    async fn empty_query_fails_without_calling_the_provider() {
        let provider = Arc::new(StubProvider::with_records(vec![long_record(
            "a",
            "https://a.example",
        )]));
        let searcher = Searcher::new(provider.clone());
        let query = SearchQuery::new("   ");

        let err = searcher.search(&query, CAP).await.expect_err("must fail");
        assert!(matches!(err, SearchError::InvalidQuery(_)));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn zero_max_results_is_rejected() {
        let searcher = searcher_with_records(Vec::new());
        let query = SearchQuery::new("valid text").with_max_results(0);

        let err = searcher.search(&query, CAP).await.expect_err("must fail");
        assert!(matches!(err, SearchError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn excessive_max_results_is_rejected() {
        let searcher = searcher_with_records(Vec::new());
        let query = SearchQuery::new("valid text").with_max_results(MAX_RESULTS_LIMIT + 1);

        let err = searcher.search(&query, CAP).await.expect_err("must fail");
        assert!(matches!(err, SearchError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn provider_failure_propagates_instead_of_faking_success() {
        let searcher = Searcher::new(Arc::new(StubProvider::failing()));
        let query = SearchQuery::new("valid text");

        let err = searcher.search(&query, CAP).await.expect_err("must fail");
        assert!(matches!(err, SearchError::Provider(_)));
    }
}
