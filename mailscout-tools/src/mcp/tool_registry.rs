//! Tool registry for MCP operations.
//!
//! The registry pattern keeps each tool self-contained in its own module:
//!
//! 1. **McpTool Trait**: the interface every tool implements
//! 2. **ToolRegistry**: stores and resolves tool instances by name
//! 3. **ToolContext**: dependency injection for tool execution
//! 4. **BaseToolImpl**: shared helpers for argument parsing and responses
//!
//! Tools are stateless; everything they need comes from the [`ToolContext`],
//! which carries the shared [`Searcher`] constructed once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::ErrorData as McpError;

use crate::search::Searcher;

/// Context shared by all tools during execution.
///
/// The context is the injection point for process-wide collaborators. The
/// search orchestrator is stateless, so a single instance is shared by every
/// concurrent invocation without synchronization.
#[derive(Clone)]
pub struct ToolContext {
    /// Shared search orchestrator (provider client + normalization pipeline).
    pub searcher: Arc<Searcher>,
}

impl ToolContext {
    /// Create a new tool context around the shared orchestrator.
    pub fn new(searcher: Arc<Searcher>) -> Self {
        Self { searcher }
    }
}

/// Trait defining the interface for all MCP tools.
///
/// Tools must be `Send + Sync`, stateless, and self-describing: they provide
/// their own name, description, and JSON schema. Tool names follow the
/// `{domain}_{action}` pattern and are stable across versions.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// The tool's unique identifier name.
    fn name(&self) -> &'static str;

    /// Human-readable description shown in tool listings.
    ///
    /// Conventionally loaded with `include_str!("description.md")`.
    fn description(&self) -> &'static str;

    /// JSON schema for argument validation.
    fn schema(&self) -> serde_json::Value;

    /// CLI category used to group this tool into a subcommand, or `None` for
    /// root-level tools.
    fn cli_category(&self) -> Option<&'static str> {
        None
    }

    /// CLI command name; defaults to the MCP tool name.
    fn cli_name(&self) -> &'static str {
        self.name()
    }

    /// Execute the tool with the given arguments and context.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools.
///
/// HashMap-based lookup gives O(1) resolution by tool name. The registry is
/// populated once at startup and shared read-only afterwards.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry.
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names.
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all registered tools as `Tool` objects for the MCP `list_tools`
    /// response.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool::new(tool.name(), tool.description(), Arc::new(schema_map))
            })
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolve a CLI path (`category/name`, or `name` for root tools) to a
    /// tool reference.
    pub fn get_tool_by_cli_path(&self, cli_path: &str) -> Option<&dyn McpTool> {
        if let Some((category, name)) = cli_path.split_once('/') {
            return self
                .tools
                .values()
                .filter(|tool| tool.cli_category() == Some(category))
                .map(|tool| tool.as_ref())
                .find(|tool| tool.cli_name() == name);
        }

        self.tools
            .values()
            .filter(|tool| tool.cli_category().is_none())
            .map(|tool| tool.as_ref())
            .find(|tool| tool.cli_name() == cli_path)
    }
}

/// Base implementation providing common utility methods for MCP tools.
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_request(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with the given text content.
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult::success(vec![Annotated::new(
            RawContent::Text(RawTextContent {
                text: content.into(),
                meta: None,
            }),
            None,
        )])
    }

    /// Create an error response with the given error message.
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult::error(vec![Annotated::new(
            RawContent::Text(RawTextContent {
                text: error_text,
                meta: None,
            }),
            None,
        )])
    }
}
