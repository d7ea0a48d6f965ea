//! Tool Router Module
//!
//! Routes incoming tool calls to the registered handler.

use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use tokio_util::sync::CancellationToken;

use tmcp_domain::ports::JsonObject;

use crate::tools::ToolRegistry;

/// Route a tool call to the handler registered under `name`
pub async fn route_tool_call(
    registry: &ToolRegistry,
    name: &str,
    arguments: Option<JsonObject>,
    cancellation: CancellationToken,
) -> Result<CallToolResult, McpError> {
    let Some(handler) = registry.get(name) else {
        return Err(McpError::invalid_params(
            format!("Unknown tool: {name}"),
            None,
        ));
    };
    handler.handle(arguments, cancellation).await
}
