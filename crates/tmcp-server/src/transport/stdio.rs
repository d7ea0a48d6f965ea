//! Stdio Transport for MCP
//!
//! Implements MCP protocol over standard input/output streams.
//! This is the traditional transport mechanism for MCP servers.

use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;

use tmcp_domain::error::{Error, Result};

use crate::McpServer;

/// Extension trait for McpServer to add stdio serving capability
pub trait StdioServerExt {
    /// Serve the MCP server over stdio until the client disconnects
    fn serve_stdio(self) -> impl std::future::Future<Output = Result<()>>;
}

impl StdioServerExt for McpServer {
    async fn serve_stdio(self) -> Result<()> {
        info!("Starting MCP protocol server on stdio transport");

        let service = self
            .serve(stdio())
            .await
            .map_err(|e| Error::internal(format!("Failed to start MCP service: {e:?}")))?;

        info!("MCP server started, waiting for requests");
        service
            .waiting()
            .await
            .map_err(|e| Error::internal(format!("MCP service error: {e:?}")))?;

        info!("MCP server shutdown complete");
        Ok(())
    }
}
