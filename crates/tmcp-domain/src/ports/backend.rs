//! Task Backend Port
//!
//! Executes a named backend task with JSON arguments and returns the raw
//! result text.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// JSON object carried as tool call arguments
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Backend task execution port
///
/// Implementations must be safe to call concurrently: one shared instance
/// serves every tool and every in-flight call.
///
/// # Example
///
/// ```ignore
/// use tmcp_domain::ports::TaskBackend;
///
/// async fn toggle(backend: &dyn TaskBackend) -> tmcp_domain::Result<String> {
///     let mut args = tmcp_domain::JsonObject::new();
///     args.insert("state".into(), "on".into());
///     backend.run_task("MCP Flashlight", &args).await
/// }
/// ```
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// Run `task_name` with `arguments`
    ///
    /// Returns the backend's response body verbatim on success.
    async fn run_task(&self, task_name: &str, arguments: &JsonObject) -> Result<String>;

    /// Short identifier used in logs
    fn backend_name(&self) -> &str;
}

/// Shared backend handle
pub type SharedTaskBackend = Arc<dyn TaskBackend>;
