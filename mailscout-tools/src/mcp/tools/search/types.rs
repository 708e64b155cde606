//! Request types for the search tools.
//!
//! Wire field names are camelCase to match the published tool contract; the
//! JSON schemas served to MCP clients are generated from these structs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::search::types::DEFAULT_MAX_RESULTS;

/// Topic used by the best-practices tool when the caller omits one.
pub const DEFAULT_TOPIC: &str = "general";

/// Request structure for the general email-trends search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailTrendsRequest {
    /// The search query string, sent to the provider verbatim.
    #[schemars(length(min = 1, max = 400))]
    pub query: String,

    /// Number of results to return (defaults to 5).
    #[serde(default = "default_max_results")]
    #[schemars(range(min = 1, max = 20))]
    pub max_results: usize,
}

/// Request structure for the best-practices search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BestPracticesRequest {
    /// Topic to scope the best-practice search (defaults to "general").
    #[serde(default = "default_topic")]
    #[schemars(length(max = 200))]
    pub topic: String,

    /// Number of results to return (defaults to 5).
    #[serde(default = "default_max_results")]
    #[schemars(range(min = 1, max = 20))]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trends_request_applies_default_max_results() {
        let request: EmailTrendsRequest =
            serde_json::from_value(serde_json::json!({ "query": "open rates" }))
                .expect("parses with defaults");
        assert_eq!(request.query, "open rates");
        assert_eq!(request.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn trends_request_reads_camel_case_fields() {
        let request: EmailTrendsRequest = serde_json::from_value(serde_json::json!({
            "query": "subject lines",
            "maxResults": 3
        }))
        .expect("parses");
        assert_eq!(request.max_results, 3);
    }

    #[test]
    fn trends_request_requires_query() {
        let result: Result<EmailTrendsRequest, _> =
            serde_json::from_value(serde_json::json!({ "maxResults": 3 }));
        assert!(result.is_err());
    }

    #[test]
    fn best_practices_request_defaults_topic() {
        let request: BestPracticesRequest =
            serde_json::from_value(serde_json::json!({})).expect("all fields have defaults");
        assert_eq!(request.topic, DEFAULT_TOPIC);
        assert_eq!(request.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn best_practices_request_accepts_topic() {
        let request: BestPracticesRequest = serde_json::from_value(serde_json::json!({
            "topic": "subject lines",
            "maxResults": 2
        }))
        .expect("parses");
        assert_eq!(request.topic, "subject lines");
        assert_eq!(request.max_results, 2);
    }
}
