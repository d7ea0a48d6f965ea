//! MCP Server Builder
//!
//! Builder pattern for constructing MCP servers with dependency injection.
//! Ensures the definitions and the backend are provided before the tool
//! registry is built.

use std::sync::Arc;

use tmcp_domain::ToolDefinition;
use tmcp_domain::ports::SharedTaskBackend;

use crate::McpServer;
use crate::tools::ToolRegistry;

/// Builder for MCP Server with dependency injection
#[derive(Default)]
pub struct McpServerBuilder {
    definitions: Option<Vec<ToolDefinition>>,
    backend: Option<SharedTaskBackend>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tool definitions
    pub fn with_definitions(mut self, definitions: Vec<ToolDefinition>) -> Self {
        self.definitions = Some(definitions);
        self
    }

    /// Set the task backend
    ///
    /// # Arguments
    /// * `backend` - Implementation of the task backend port
    pub fn with_backend(mut self, backend: SharedTaskBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if definitions or backend are
    /// not provided, and `BuilderError::Registry` if the definitions cannot be
    /// registered.
    pub fn build(self) -> Result<McpServer, BuilderError> {
        let definitions = self
            .definitions
            .ok_or(BuilderError::MissingDependency("tool definitions"))?;
        let backend = self
            .backend
            .ok_or(BuilderError::MissingDependency("task backend"))?;

        let registry = ToolRegistry::build(definitions, backend)?;
        Ok(McpServer::new(Arc::new(registry)))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),

    /// The tool registry rejected the definitions
    #[error("Failed to register tools: {0}")]
    Registry(#[from] tmcp_domain::Error),
}
