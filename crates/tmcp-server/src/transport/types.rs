//! Transport layer types
//!
//! Common types used across transport implementations for MCP protocol messages.

use serde::{Deserialize, Serialize};

use crate::constants::JSONRPC_VERSION;

/// MCP request payload (JSON-RPC format)
///
/// A message without `id` is a notification and gets no response.
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC method
    pub method: String,
    /// Request parameters
    pub params: Option<serde_json::Value>,
    /// Request ID
    pub id: Option<serde_json::Value>,
}

impl McpRequest {
    /// Whether the message expects no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// MCP response payload (JSON-RPC format)
#[derive(Debug, Serialize)]
pub struct McpResponse {
    /// JSON-RPC version
    pub jsonrpc: &'static str,
    /// Response result (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    /// Request ID
    pub id: Option<serde_json::Value>,
}

/// MCP error response (JSON-RPC format)
#[derive(Debug, Serialize)]
pub struct McpError {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

impl McpResponse {
    /// Create a success response
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: None,
            error: Some(McpError {
                code,
                message: message.into(),
            }),
            id,
        }
    }
}
