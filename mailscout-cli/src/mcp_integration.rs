//! Integration layer for calling MCP tools from CLI commands.
//!
//! CLI search commands execute the registered MCP tools in-process, so the
//! CLI and the server share one implementation of every tool.

use std::sync::Arc;

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::{Map, Value};

use mailscout_tools::search::Searcher;
use mailscout_tools::{register_search_tools, ToolContext, ToolRegistry};

/// CLI-specific tool context that can resolve and execute MCP tools.
pub struct CliToolContext {
    tool_registry: Arc<ToolRegistry>,
    tool_context: ToolContext,
}

impl CliToolContext {
    /// Create a tool context over the shared search orchestrator.
    pub fn new(searcher: Arc<Searcher>) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_search_tools(&mut tool_registry);

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: ToolContext::new(searcher),
        }
    }

    /// Execute the tool registered under the given CLI path
    /// (`category/name`).
    pub async fn execute_cli_tool(
        &self,
        cli_path: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult, McpError> {
        let tool = self
            .tool_registry
            .get_tool_by_cli_path(cli_path)
            .ok_or_else(|| {
                McpError::invalid_request(format!("Unknown tool: {cli_path}"), None)
            })?;
        tool.execute(arguments, &self.tool_context).await
    }
}

/// Formatting helpers for presenting tool results on the terminal.
pub mod response_formatting {
    use rmcp::model::{CallToolResult, RawContent};

    /// Format a successful tool result for display.
    pub fn format_success_response(result: &CallToolResult) -> String {
        extract_text_content(result).unwrap_or_else(|| "Operation successful".to_string())
    }

    /// Format an error tool result for display.
    pub fn format_error_response(result: &CallToolResult) -> String {
        extract_text_content(result).unwrap_or_else(|| "Operation failed".to_string())
    }

    /// Extract text content from a CallToolResult.
    pub fn extract_text_content(result: &CallToolResult) -> Option<String> {
        result
            .content
            .first()
            .and_then(|content| match &content.raw {
                RawContent::Text(text_content) => Some(text_content.text.clone()),
                _ => None,
            })
    }
}
