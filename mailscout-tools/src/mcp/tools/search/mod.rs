//! Web search tools for MCP operations.
//!
//! Two tools expose the search orchestrator to MCP clients: a general search
//! over email-marketing topics and a best-practices search that templates its
//! query from a topic. They share the orchestrator, the provider client, and
//! the normalization pipeline; they differ only in query construction and
//! summary cap.

pub mod best_practices;
pub mod trends;
pub mod types;

use rmcp::ErrorData as McpError;

use crate::mcp::tool_registry::ToolRegistry;
use crate::search::SearchError;

/// Register all search-related tools with the registry.
pub fn register_search_tools(registry: &mut ToolRegistry) {
    registry.register(trends::EmailTrendsSearchTool::new());
    registry.register(best_practices::BestPracticesSearchTool::new());
}

/// Convert a search-core error to an MCP error, keeping caller errors
/// distinguishable from provider failures.
pub(crate) fn search_error_to_mcp(error: SearchError) -> McpError {
    match error {
        SearchError::InvalidQuery(message) => McpError::invalid_request(message, None),
        SearchError::Provider(cause) => {
            McpError::internal_error(format!("search provider failure: {cause}"), None)
        }
    }
}
