//! Todo lists MCP server binary.
//!
//! Serves the todo tools over stdio (default) or Streamable HTTP. Every
//! tool call is proxied to the REST API at `--api-url`.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use miette::Diagnostic;
use thiserror::Error;
use todolists::api::DEFAULT_LOG_FILTER;
use todolists::mcp::{self, ApiClient, ServeError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("MCP server error: {0}")]
    #[diagnostic(code(todolists::binary::mcp))]
    Serve(#[from] ServeError),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Transport {
    /// JSON-RPC over stdin/stdout
    Stdio,
    /// Streamable HTTP at /mcp
    Http,
}

#[derive(Parser)]
#[command(name = "todo-mcp")]
#[command(author, version, about = "Todo lists MCP server", long_about = None)]
struct Cli {
    /// REST API base URL (overrides TODO_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Transport to serve MCP over
    #[arg(long, value_enum, default_value = "stdio")]
    transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "5090")]
    port: u16,
}

/// Logs go to stderr; stdout carries the stdio protocol stream.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    init_tracing();

    let client = Arc::new(ApiClient::new(cli.api_url));
    info!("Proxying tool calls to {}", client.base_url());

    match cli.transport {
        Transport::Stdio => mcp::serve_stdio(client).await?,
        Transport::Http => mcp::serve_http(client, SocketAddr::new(cli.host, cli.port)).await?,
    }

    Ok(())
}
