//! Error types for the search core.
//!
//! The normalization pipeline itself never fails on malformed text; the only
//! error sources are the orchestrator's own preconditions and the provider
//! round trip. Messages are stable strings safe to surface to callers; the
//! provider credential never appears in them.

use std::time::Duration;

/// Errors surfaced by the search orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The caller supplied an unusable query (empty text, zero or excessive
    /// result count). The provider is never contacted in this case.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The provider round trip failed; no partial response is synthesized.
    #[error("search provider failure: {0}")]
    Provider(#[from] ProviderError),
}

/// Failures while talking to the external search provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request exceeded the client timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection-level or transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code from the provider.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The provider is throttling this credential.
    #[error("rate limited by provider")]
    RateLimited,

    /// The response body did not match the expected shape.
    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_query() {
        let err = SearchError::InvalidQuery("search query cannot be empty".into());
        assert_eq!(err.to_string(), "invalid query: search query cannot be empty");
    }

    #[test]
    fn display_provider_wraps_cause() {
        let err = SearchError::from(ProviderError::Network("connection refused".into()));
        assert_eq!(
            err.to_string(),
            "search provider failure: network error: connection refused"
        );
    }

    #[test]
    fn display_status() {
        let err = ProviderError::Status {
            status: 503,
            message: "upstream overloaded".into(),
        };
        assert_eq!(
            err.to_string(),
            "provider returned HTTP 503: upstream overloaded"
        );
    }

    #[test]
    fn display_timeout() {
        let err = ProviderError::Timeout(Duration::from_secs(15));
        assert_eq!(err.to_string(), "request timed out after 15s");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
        assert_send_sync::<ProviderError>();
    }
}
