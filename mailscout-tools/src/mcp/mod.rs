//! Model Context Protocol (MCP) server support.
//!
//! The MCP module implements the dispatch surface that routes named,
//! schema-validated tool invocations to the search orchestrator:
//!
//! - **Server Layer**: [`McpServer`] handles MCP protocol communication
//! - **Registry Layer**: [`ToolRegistry`] manages tool registration and
//!   dispatch
//! - **Tool Layer**: the individual search tool implementations under
//!   [`tools`]
//!
//! ## Starting a server
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mailscout_tools::mcp::serve_stdio;
//! use mailscout_tools::search::{Searcher, TavilyClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(TavilyClient::new("tvly-..."));
//! serve_stdio(Arc::new(Searcher::new(provider))).await?;
//! # Ok(())
//! # }
//! ```

pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod unified_server;

pub use server::McpServer;
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
pub use tools::search::register_search_tools;
pub use unified_server::{serve_stdio, start_http_server, McpServerHandle, ServeError};
