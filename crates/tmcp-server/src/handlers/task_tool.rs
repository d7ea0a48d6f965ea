//! Tasker Task Tool Handler
//!
//! Handles a call to one Tasker-backed tool by running its task on the
//! backend.

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use tmcp_domain::constants::ARGUMENTS_REQUIRED_MESSAGE;
use tmcp_domain::error::Error;
use tmcp_domain::ports::{JsonObject, SharedTaskBackend};
use tmcp_domain::{ToolDefinition, ToolDescriptor};

/// Handler for a single Tasker task tool
///
/// Owns its own copy of the definition, so a handler is valid for the
/// lifetime of the registry regardless of where the definitions came from.
pub struct TaskToolHandler {
    definition: ToolDefinition,
    descriptor: ToolDescriptor,
    backend: SharedTaskBackend,
}

impl TaskToolHandler {
    /// Create a new handler for `definition`
    pub fn new(definition: ToolDefinition, backend: SharedTaskBackend) -> Self {
        let descriptor = ToolDescriptor::from_definition(&definition);
        Self {
            definition,
            descriptor,
            backend,
        }
    }

    /// Definition this handler serves
    pub fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    /// Translated argument description
    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    /// Handle a tool call
    ///
    /// Missing arguments produce an error result without contacting the
    /// backend. Backend failures and cancellation are execution errors.
    pub async fn handle(
        &self,
        arguments: Option<JsonObject>,
        cancellation: CancellationToken,
    ) -> Result<CallToolResult, McpError> {
        let Some(arguments) = arguments else {
            return Ok(CallToolResult::error(vec![Content::text(
                ARGUMENTS_REQUIRED_MESSAGE,
            )]));
        };

        info!(
            tool = %self.definition.name,
            task = %self.definition.tasker_name,
            arguments = %serde_json::to_string(&arguments).unwrap_or_default(),
            "Calling tool"
        );

        let outcome = tokio::select! {
            result = self.backend.run_task(&self.definition.tasker_name, &arguments) => result,
            () = cancellation.cancelled() => Err(Error::cancelled(&self.definition.tasker_name)),
        };

        match outcome {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                warn!(
                    tool = %self.definition.name,
                    backend = self.backend.backend_name(),
                    error = %e,
                    "Tool call failed"
                );
                Err(McpError::internal_error(
                    format!("Failed to run task '{}': {}", self.definition.tasker_name, e),
                    None,
                ))
            }
        }
    }
}
