//! # MailScout Tools
//!
//! MCP (Model Context Protocol) server and tools for email-marketing research.
//!
//! This crate provides the MCP server functionality and the search tools that
//! back it. It includes:
//!
//! - **Search core**: a Tavily-backed web search client plus the result
//!   normalization pipeline (sanitize → extract → summarize) that turns raw
//!   provider records into bounded, de-noised summaries
//! - **MCP Server**: Model Context Protocol server implementation over stdio
//!   or streamable HTTP
//! - **Tool Registry**: extensible tool registration system
//! - **Search Tools**: `search_email_trends` and `search_email_best_practices`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mailscout_tools::config::Config;
//! use mailscout_tools::search::{Searcher, TavilyClient};
//! use mailscout_tools::McpServer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let provider = Arc::new(TavilyClient::new(config.tavily_api_key()));
//! let server = McpServer::new(Arc::new(Searcher::new(provider)));
//!
//! // Server is ready to handle MCP requests
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Process configuration (provider credential)
pub mod config;

/// Model Context Protocol (MCP) server and tools
pub mod mcp;

/// Search core: provider client and result normalization pipeline
pub mod search;

// Re-export key types for convenience
pub use mcp::McpServer;
pub use mcp::{register_search_tools, ToolContext, ToolRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
