//! Todo lists: a REST API over SQLite and an MCP tool server that proxies
//! to it over HTTP.

pub mod api;
pub mod db;
pub mod mcp;
