//! MCP server implementation
//!
//! Exposes the tool registry over the Model Context Protocol. Tool
//! discovery and dispatch are handled manually so every tool shares the
//! same executor.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParams, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};
use tracing::info;

use super::client::ApiClient;
use super::registry::ToolRegistry;

const INSTRUCTIONS: &str = "Todo lists MCP server - create, read, update and delete todo lists \
    and their items, and mark items as complete. Lists and items are addressed by name.";

/// MCP server backed by the todo lists REST API
#[derive(Clone)]
pub struct TodoMcpServer {
    registry: Arc<ToolRegistry>,
}

impl TodoMcpServer {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            registry: Arc::new(ToolRegistry::new(client)),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

fn implementation() -> Implementation {
    let mut implementation = Implementation::from_build_env();
    implementation.name = env!("CARGO_PKG_NAME").to_string();
    implementation.version = env!("CARGO_PKG_VERSION").to_string();
    implementation
}

impl ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = implementation();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(
            self.registry.definitions(),
        )))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move {
            let arguments = request.arguments.unwrap_or_default();

            tokio::select! {
                result = self.registry.call(&request.name, &arguments) => {
                    result.map_err(|e| ErrorData::invalid_params(e.to_string(), None))
                }
                _ = context.ct.cancelled() => {
                    info!(tool = %request.name, "Tool call cancelled by peer");
                    Err(ErrorData::internal_error("Request cancelled", None))
                }
            }
        }
    }
}
