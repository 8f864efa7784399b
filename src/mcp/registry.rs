//! Dispatch registry: tool name to executor.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::instrument;

use super::client::ApiClient;
use super::error::DispatchError;
use super::tools::{ToolExecutor, ToolSpec, catalog};

/// Looks tools up by exact, case-sensitive name and runs them.
pub struct ToolRegistry {
    tools: &'static [ToolSpec],
    executor: ToolExecutor,
}

impl ToolRegistry {
    /// Registry over the full tool catalog.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            tools: &catalog::TOOLS,
            executor: ToolExecutor::new(client),
        }
    }

    pub fn find(&self, name: &str) -> Option<&'static ToolSpec> {
        self.tools.iter().find(|spec| spec.name == name)
    }

    /// Name, description and schema of every registered tool.
    pub fn definitions(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolSpec::definition).collect()
    }

    /// Run the named tool and return its envelope unchanged.
    #[instrument(skip(self, arguments))]
    pub async fn call(
        &self,
        name: &str,
        arguments: &JsonObject,
    ) -> Result<CallToolResult, DispatchError> {
        let spec = self.find(name).ok_or_else(|| DispatchError::UnknownTool {
            name: name.to_string(),
        })?;

        Ok(self.executor.execute(spec, arguments).await)
    }
}
