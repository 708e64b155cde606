//! Search core: provider client and result normalization pipeline.
//!
//! The pipeline turns raw, noisy provider records into a bounded response:
//!
//! 1. [`sanitize`] strips boilerplate phrases, URLs, and excess whitespace
//!    from a raw content blob
//! 2. [`extract_main_content`] keeps the likely-relevant lines and bounds
//!    their volume
//! 3. each record is normalized into `{title, url, snippet}`
//! 4. [`build_summary`] joins the snippets into a single capped summary
//!
//! The [`Searcher`] orchestrates one provider round trip per call and is
//! stateless between calls; concurrent searches are fully independent.

pub mod error;
pub mod extract;
pub mod provider;
pub mod sanitize;
pub mod searcher;
pub mod summary;
pub mod types;

pub use error::{ProviderError, SearchError};
pub use extract::extract_main_content;
pub use provider::{SearchProvider, TavilyClient};
pub use sanitize::sanitize;
pub use searcher::{normalize, Searcher};
pub use summary::{build_summary, NO_RESULTS_SUMMARY};
pub use types::{RawSearchResult, SearchOutcome, SearchQuery, SearchRecord};

#[cfg(test)]
pub(crate) mod test_support {
    //! Stub provider shared by unit tests across the crate.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::error::ProviderError;
    use super::provider::SearchProvider;
    use super::searcher::Searcher;
    use super::types::RawSearchResult;

    /// Provider stub returning canned records, or failing on demand.
    pub(crate) struct StubProvider {
        records: Vec<RawSearchResult>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubProvider {
        pub(crate) fn with_records(records: Vec<RawSearchResult>) -> Self {
            Self {
                records,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                records: Vec::new(),
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchProvider for StubProvider {
        async fn search(
            &self,
            _query: &str,
            _max_results: usize,
        ) -> Result<Vec<RawSearchResult>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ProviderError::Network("connection reset by peer".into()));
            }
            Ok(self.records.clone())
        }
    }

    /// A record with content long enough to survive the extractor.
    pub(crate) fn long_record(title: &str, url: &str) -> RawSearchResult {
        RawSearchResult {
            title: title.to_owned(),
            url: url.to_owned(),
            content: Some(
                "This paragraph carries enough substance to clear the minimum line \
                 length threshold used by the extractor."
                    .to_owned(),
            ),
        }
    }

    /// Convenience: a `Searcher` over a stub with the given records.
    pub(crate) fn searcher_with_records(records: Vec<RawSearchResult>) -> Searcher {
        Searcher::new(Arc::new(StubProvider::with_records(records)))
    }
}
