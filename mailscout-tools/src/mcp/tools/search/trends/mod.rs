//! General email-trends search tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::search::search_error_to_mcp;
use crate::mcp::tools::search::types::EmailTrendsRequest;
use crate::search::SearchQuery;

/// Byte cap applied to the summary built for this tool.
pub const TRENDS_SUMMARY_CAP: usize = 3500;

/// Tool performing a general web search for email marketing trends.
#[derive(Default)]
pub struct EmailTrendsSearchTool;

impl EmailTrendsSearchTool {
    /// Creates a new instance of the tool.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for EmailTrendsSearchTool {
    fn name(&self) -> &'static str {
        "search_email_trends"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(EmailTrendsRequest))
            .expect("Failed to generate schema")
    }

    fn cli_category(&self) -> Option<&'static str> {
        Some("search")
    }

    fn cli_name(&self) -> &'static str {
        "trends"
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: EmailTrendsRequest = BaseToolImpl::parse_arguments(arguments)?;

        tracing::info!(
            query = %request.query,
            max_results = request.max_results,
            "starting email trends search"
        );

        let query = SearchQuery::new(request.query).with_max_results(request.max_results);
        let outcome = context
            .searcher
            .search(&query, TRENDS_SUMMARY_CAP)
            .await
            .map_err(search_error_to_mcp)?;

        let payload = serde_json::to_string_pretty(&outcome).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize response: {e}"), None)
        })?;

        Ok(BaseToolImpl::create_success_response(payload))
    }
}
