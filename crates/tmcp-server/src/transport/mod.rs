//! MCP Transport Layer
//!
//! Transport implementations for the MCP protocol.
//!
//! ## Available Transports
//!
//! | Transport | Description | Use Case |
//! |-----------|-------------|----------|
//! | [`stdio`] | Standard I/O streams | Desktop hosts launching the bridge |
//! | [`http`] | HTTP server with SSE sessions | Remote or networked hosts |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tmcp_server::transport::{HttpTransport, HttpTransportConfig, StdioServerExt};
//!
//! // Stdio transport
//! server.serve_stdio().await?;
//!
//! // HTTP/SSE transport
//! let http = HttpTransport::new(HttpTransportConfig::localhost(8000), Arc::new(server));
//! http.start().await?;
//! ```

pub mod http;
pub mod stdio;
pub mod types;

pub use http::{HttpTransport, HttpTransportConfig};
pub use stdio::StdioServerExt;
pub use types::{McpError, McpRequest, McpResponse};

// Re-export TransportMode from infrastructure config (single source of truth)
pub use tmcp_infrastructure::config::TransportMode;
