//! Server-specific constants
//!
//! Contains constants specific to the MCP server implementation,
//! including JSON-RPC error codes and transport paths.

// ============================================================================
// JSON-RPC ERROR CODES (Standard)
// ============================================================================

/// JSON-RPC Invalid request error code
pub const JSONRPC_INVALID_REQUEST: i32 = -32600;

/// JSON-RPC Method not found error code
pub const JSONRPC_METHOD_NOT_FOUND: i32 = -32601;

/// JSON-RPC Invalid params error code
pub const JSONRPC_INVALID_PARAMS: i32 = -32602;

/// JSON-RPC version string
pub const JSONRPC_VERSION: &str = "2.0";

// ============================================================================
// SERVER IDENTITY
// ============================================================================

/// Name reported in `initialize`
pub const SERVER_NAME: &str = "Tasker MCP";

/// Instructions reported in `initialize`
pub const SERVER_INSTRUCTIONS: &str = "Tasker MCP - run Tasker tasks on an Android device.\n\n\
     Every tool maps to one Tasker task. Call `tools/list` for the available \
     tasks and their arguments.";

// ============================================================================
// SSE TRANSPORT
// ============================================================================

/// Path that receives session messages
pub const MESSAGE_PATH: &str = "/message";

/// First event of every SSE session, carrying the message endpoint
pub const SSE_ENDPOINT_EVENT: &str = "endpoint";

/// Event carrying one JSON-RPC response
pub const SSE_MESSAGE_EVENT: &str = "message";
