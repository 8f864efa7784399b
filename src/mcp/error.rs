//! Tool-call error taxonomy.
//!
//! Every failure inside a tool call is converted to a [`ToolError`] and then
//! rendered into the error envelope at the dispatch boundary; none of them
//! surface as protocol errors.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ToolError {
    /// Missing or wrongly typed argument keys.
    #[error("{message}")]
    #[diagnostic(code(todolists::mcp::argument))]
    Argument { message: String },

    /// Field-level constraint violations on the typed input.
    #[error("{message}")]
    #[diagnostic(code(todolists::mcp::validation))]
    Validation { message: String },

    /// A name could not be resolved to an id.
    #[error("{message}")]
    #[diagnostic(
        code(todolists::mcp::not_found),
        help("Check the exact (case-sensitive) list or item name")
    )]
    NotFound { message: String },

    /// The REST API could not be reached.
    #[error("{message}")]
    #[diagnostic(
        code(todolists::mcp::http),
        help("Is the API server running? Try: todo-api\nOr set TODO_API_URL to point to the correct server.")
    )]
    Http { message: String },

    #[error("{message}")]
    #[diagnostic(code(todolists::mcp::unexpected))]
    Unexpected { message: String },
}

impl ToolError {
    /// Envelope prefix for this error.
    pub fn category(&self) -> &'static str {
        match self {
            ToolError::Argument { .. } | ToolError::Validation { .. } | ToolError::NotFound { .. } => {
                "Argument error"
            }
            ToolError::Http { .. } => "HTTP error",
            ToolError::Unexpected { .. } => "Unexpected error",
        }
    }

    /// Text placed in the error envelope.
    pub fn envelope_text(&self) -> String {
        format!("{}: {}", self.category(), self)
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(e: reqwest::Error) -> Self {
        // A body that arrived but could not be decoded is not a transport failure
        if e.is_decode() {
            ToolError::Unexpected {
                message: e.to_string(),
            }
        } else {
            ToolError::Http {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::Unexpected {
            message: e.to_string(),
        }
    }
}

pub type ToolResult<T> = Result<T, ToolError>;

/// Errors raised by the dispatch registry itself, before any tool runs.
#[derive(Error, Diagnostic, Debug)]
pub enum DispatchError {
    #[error("Unknown tool: '{name}'")]
    #[diagnostic(code(todolists::mcp::unknown_tool))]
    UnknownTool { name: String },
}

/// Failures starting or running an MCP transport.
#[derive(Error, Diagnostic, Debug)]
pub enum ServeError {
    #[error("Failed to bind to {addr}: {source}")]
    #[diagnostic(code(todolists::mcp::bind))]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("MCP HTTP server error: {0}")]
    #[diagnostic(code(todolists::mcp::serve))]
    Serve(#[source] std::io::Error),

    #[error("MCP session failed: {message}")]
    #[diagnostic(code(todolists::mcp::session))]
    Session { message: String },
}
