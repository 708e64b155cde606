//! MCP tool implementations organized by category.
//!
//! Each tool lives in its own module with a `description.md` alongside the
//! implementation; `register_*_tools` functions wire a category into the
//! [`ToolRegistry`](crate::mcp::tool_registry::ToolRegistry).

pub mod search;
