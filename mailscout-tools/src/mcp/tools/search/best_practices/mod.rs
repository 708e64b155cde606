//! Topic-scoped best-practices search tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::search::search_error_to_mcp;
use crate::mcp::tools::search::types::{BestPracticesRequest, DEFAULT_TOPIC};
use crate::search::SearchQuery;

/// Byte cap applied to the summary built for this tool. Best-practice answers
/// are consumed as guidance, so the digest stays shorter than the general
/// search tool's.
pub const BEST_PRACTICES_SUMMARY_CAP: usize = 2000;

/// Base phrase the topic is appended to when building the provider query.
const QUERY_PREFIX: &str = "email marketing best practices";

/// Tool searching for email marketing best practices on a given topic.
#[derive(Default)]
pub struct BestPracticesSearchTool;

impl BestPracticesSearchTool {
    /// Creates a new instance of the tool.
    pub fn new() -> Self {
        Self
    }
}

/// Build the provider query for a topic; a blank topic falls back to the
/// default.
fn build_query(topic: &str) -> String {
    let topic = topic.trim();
    let topic = if topic.is_empty() { DEFAULT_TOPIC } else { topic };
    format!("{QUERY_PREFIX} {topic}")
}

#[async_trait]
impl McpTool for BestPracticesSearchTool {
    fn name(&self) -> &'static str {
        "search_email_best_practices"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(BestPracticesRequest))
            .expect("Failed to generate schema")
    }

    fn cli_category(&self) -> Option<&'static str> {
        Some("search")
    }

    fn cli_name(&self) -> &'static str {
        "best-practices"
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: BestPracticesRequest = BaseToolImpl::parse_arguments(arguments)?;

        tracing::info!(
            topic = %request.topic,
            max_results = request.max_results,
            "starting best practices search"
        );

        let query =
            SearchQuery::new(build_query(&request.topic)).with_max_results(request.max_results);
        let outcome = context
            .searcher
            .search(&query, BEST_PRACTICES_SUMMARY_CAP)
            .await
            .map_err(search_error_to_mcp)?;

        let payload = serde_json::to_string_pretty(&outcome).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize response: {e}"), None)
        })?;

        Ok(BaseToolImpl::create_success_response(payload))
    }
}
