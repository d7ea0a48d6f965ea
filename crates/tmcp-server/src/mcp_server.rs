//! MCP Server Implementation
//!
//! Core MCP protocol server exposing Tasker tasks as tools.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};

use crate::constants::{SERVER_INSTRUCTIONS, SERVER_NAME};
use crate::tools::{ToolRegistry, route_tool_call};

/// Core MCP server implementation
///
/// Cheap to clone: every clone shares the same read-only registry.
#[derive(Clone)]
pub struct McpServer {
    /// Registered tools
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server over a built registry
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Access to the tool registry (for HTTP transport)
    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.registry)
    }
}

impl ServerHandler for McpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    ///
    /// The request context's cancellation token aborts the backend call when
    /// the client cancels the request.
    async fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        route_tool_call(
            &self.registry,
            &request.name,
            request.arguments,
            context.ct,
        )
        .await
    }
}
