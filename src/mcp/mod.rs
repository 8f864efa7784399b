//! Model Context Protocol (MCP) server for todo lists
//!
//! Exposes list and item operations as tools that proxy to the REST API
//! over HTTP.
//!
//! # Architecture
//!
//! - **client**: HTTP client bound to the REST API base URL
//! - **lookup**: Resolves list and item names to ids
//! - **validation** / **inputs**: Argument and typed-input checks
//! - **tools**: Per-tool configuration records and the shared executor
//! - **registry**: Exact-name dispatch and tool discovery
//! - **server**: rmcp `ServerHandler`
//! - **service**: stdio and Streamable HTTP transports

pub mod client;
pub mod error;
mod inputs;
pub mod lookup;
pub mod registry;
pub mod server;
mod service;
pub mod tools;
mod validation;

#[cfg(test)]
mod lookup_test;
#[cfg(test)]
mod test_utils;

pub use client::ApiClient;
pub use error::{DispatchError, ServeError, ToolError, ToolResult};
pub use lookup::TodoLookupService;
pub use registry::ToolRegistry;
pub use server::TodoMcpServer;
pub use service::{create_mcp_router, create_mcp_service, serve_http, serve_stdio};
