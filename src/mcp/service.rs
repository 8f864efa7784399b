//! MCP transports: stdio and Streamable HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::client::ApiClient;
use super::error::ServeError;
use super::server::TodoMcpServer;
use crate::api::shutdown_signal;

/// Create MCP Streamable HTTP service
///
/// Each session gets its own [`TodoMcpServer`]; all of them share one API
/// client. The returned service can be nested into an Axum router.
pub fn create_mcp_service(
    client: Arc<ApiClient>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<TodoMcpServer, LocalSessionManager> {
    // rmcp expects an io::Error from the factory
    let service_factory = move || -> Result<TodoMcpServer, std::io::Error> {
        Ok(TodoMcpServer::new(Arc::clone(&client)))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Router with the MCP endpoint mounted at `/mcp`.
pub fn create_mcp_router(client: Arc<ApiClient>, cancellation_token: CancellationToken) -> Router {
    Router::new()
        .nest_service("/mcp", create_mcp_service(client, cancellation_token))
        .layer(TraceLayer::new_for_http())
}

/// Serve MCP over Streamable HTTP until Ctrl-C.
pub async fn serve_http(client: Arc<ApiClient>, addr: SocketAddr) -> Result<(), ServeError> {
    let ct = CancellationToken::new();
    let router = create_mcp_router(client, ct.child_token());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            ct.cancel();
        })
        .await
        .map_err(ServeError::Serve)?;

    info!("MCP server stopped");
    Ok(())
}

/// Serve MCP over stdin/stdout until the peer disconnects.
pub async fn serve_stdio(client: Arc<ApiClient>) -> Result<(), ServeError> {
    let running = TodoMcpServer::new(client)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServeError::Session {
            message: e.to_string(),
        })?;
    info!("MCP server running on stdio");

    let reason = running.waiting().await.map_err(|e| ServeError::Session {
        message: e.to_string(),
    })?;
    info!(?reason, "MCP session ended");

    Ok(())
}
