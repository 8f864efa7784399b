use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{debug, instrument, warn};

use super::{ApiCall, ToolSpec};
use crate::mcp::client::ApiClient;
use crate::mcp::error::{ToolError, ToolResult};
use crate::mcp::lookup::TodoLookupService;

/// Runs any [`ToolSpec`]: extract, resolve, invoke, interpret.
///
/// Every failure ends up as an error envelope; `execute` never fails.
#[derive(Clone)]
pub struct ToolExecutor {
    client: Arc<ApiClient>,
    lookup: TodoLookupService,
}

impl ToolExecutor {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            lookup: TodoLookupService::new(Arc::clone(&client)),
            client,
        }
    }

    #[instrument(skip(self, spec, arguments), fields(tool = spec.name))]
    pub async fn execute(&self, spec: &ToolSpec, arguments: &JsonObject) -> CallToolResult {
        match self.run(spec, arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, category = e.category(), "Tool call failed");
                CallToolResult::error(vec![Content::text(e.envelope_text())])
            }
        }
    }

    async fn run(&self, spec: &ToolSpec, arguments: &JsonObject) -> ToolResult<CallToolResult> {
        let call = spec.operation.plan(arguments, &self.lookup).await?;
        debug!(method = %call.method, path = %call.path, "Calling API");

        let response = self.send(call).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "{}: {} - {}",
                spec.failure_prefix, status, body
            ))]));
        }

        if let Some(message) = spec.empty_result_error
            && body.trim() == "[]"
        {
            return Err(ToolError::Argument {
                message: message.to_string(),
            });
        }

        Ok(CallToolResult::success(vec![Content::text(format!(
            "{}: {}",
            spec.success_message, body
        ))]))
    }

    async fn send(&self, call: ApiCall) -> ToolResult<reqwest::Response> {
        let mut request = self.client.request(call.method, &call.path);
        if let Some((key, value)) = &call.query {
            request = request.query(&[(*key, value.as_str())]);
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }
}
