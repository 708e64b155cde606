//! MCP server implementation for serving the search tools.

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use tokio::sync::RwLock;

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::search::register_search_tools;
use crate::search::Searcher;

/// Server instructions displayed to MCP clients.
const SERVER_INSTRUCTIONS: &str =
    "Web research tools for email marketing: current trends and best practices.";

/// MCP server for all MailScout functionality.
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<RwLock<ToolRegistry>>,
    tool_context: Arc<ToolContext>,
}

/// Create ServerCapabilities for the MCP protocol.
fn create_server_capabilities() -> ServerCapabilities {
    ServerCapabilities::builder()
        .enable_tools()
        .enable_tool_list_changed()
        .build()
}

/// Create Implementation information for the MCP server.
fn create_server_implementation() -> Implementation {
    Implementation::new("MailScout", crate::VERSION).with_title("MailScout MCP Server")
}

impl McpServer {
    /// Create a new MCP server around the shared search orchestrator.
    ///
    /// All tools are registered here; the orchestrator is the only injected
    /// collaborator and is shared read-only across concurrent invocations.
    pub fn new(searcher: Arc<Searcher>) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_search_tools(&mut tool_registry);
        tracing::debug!(
            tools = tool_registry.len(),
            "registered all tool handlers"
        );

        Self {
            tool_registry: Arc::new(RwLock::new(tool_registry)),
            tool_context: Arc::new(ToolContext::new(searcher)),
        }
    }

    /// List all available tools from the tool registry.
    pub async fn list_tools(&self) -> Vec<Tool> {
        self.tool_registry.read().await.list_tools()
    }

    /// Whether a tool with the given name is registered.
    pub async fn has_tool(&self, name: &str) -> bool {
        self.tool_registry.read().await.get_tool(name).is_some()
    }

    /// Execute a tool by name with the given arguments.
    ///
    /// Used by the CLI's in-process tool execution and by integration tests;
    /// the MCP `call_tool` handler goes through the same path.
    pub async fn execute_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, McpError> {
        let registry = self.tool_registry.read().await;
        if let Some(tool) = registry.get_tool(name) {
            let arguments_map = match arguments {
                serde_json::Value::Object(map) => map,
                _ => serde_json::Map::new(),
            };
            tool.execute(arguments_map, &self.tool_context).await
        } else {
            Err(McpError::invalid_request(
                format!("Unknown tool: {name}"),
                None,
            ))
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult::new(create_server_capabilities())
            .with_server_info(create_server_implementation())
            .with_instructions(SERVER_INSTRUCTIONS))
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.read().await.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!(tool = %request.name, "call_tool invoked");

        let registry = self.tool_registry.read().await;
        let tool = registry.get_tool(&request.name).ok_or_else(|| {
            tracing::error!(tool = %request.name, "unknown tool requested");
            McpError::invalid_request(format!("Unknown tool: {}", request.name), None)
        })?;

        let arguments = request.arguments.unwrap_or_default();
        tracing::info!(tool = %request.name, "executing tool");
        tool.execute(arguments, &self.tool_context).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(create_server_capabilities())
            .with_server_info(create_server_implementation())
            .with_instructions(SERVER_INSTRUCTIONS)
    }
}
