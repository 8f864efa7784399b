//! Tool definitions and the shared executor.
//!
//! Each tool is a static [`ToolSpec`] record: its declared name and
//! description, the [`Operation`] it performs and the messages used to build
//! its envelopes. Argument schemas come from the operation's typed input. A
//! single [`ToolExecutor`] runs any of them.

pub mod catalog;
mod executor;
mod operation;


use rmcp::model::Tool;

pub use executor::ToolExecutor;
pub use operation::{ApiCall, Operation};

/// Static configuration of one tool.
#[derive(Debug)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub operation: Operation,
    pub success_message: &'static str,
    pub failure_prefix: &'static str,
    /// Argument error raised when a successful response is an empty array.
    pub empty_result_error: Option<&'static str>,
}

impl ToolSpec {
    /// Discovery triple: name, description and JSON input schema.
    pub fn definition(&self) -> Tool {
        Tool::new(self.name, self.description, self.operation.input_schema())
    }
}
