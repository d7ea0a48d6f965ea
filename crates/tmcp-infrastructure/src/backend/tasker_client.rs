//! Tasker HTTP client
//!
//! Runs Tasker tasks through the backend's `/run_task` endpoint. The
//! response body is opaque to this layer and is returned untouched.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use tmcp_domain::error::{Error, Result};
use tmcp_domain::ports::{JsonObject, TaskBackend};

use crate::config::BackendConfig;
use crate::constants::CONTENT_TYPE_JSON;
use crate::error_ext::ErrorContext;

/// Request body of `/run_task`
#[derive(Debug, Serialize)]
struct RunTaskRequest<'a> {
    name: &'a str,
    arguments: &'a JsonObject,
}

/// Tasker backend client
///
/// Cheap to share: the underlying `reqwest::Client` pools connections and
/// tolerates concurrent use, and no per-call state is kept here.
///
/// ## Example
///
/// ```rust,no_run
/// use tmcp_infrastructure::backend::TaskerClient;
/// use tmcp_infrastructure::config::BackendConfig;
///
/// fn example() -> tmcp_domain::Result<()> {
///     let client = TaskerClient::new(BackendConfig::new("192.168.1.20", 1821))?;
///     assert_eq!(client.url(), "http://192.168.1.20:1821/run_task");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TaskerClient {
    config: BackendConfig,
    url: String,
    http_client: Client,
}

impl TaskerClient {
    /// Create a client with its own connection pool
    ///
    /// A zero timeout is rejected since every request would fail at once.
    pub fn new(config: BackendConfig) -> Result<Self> {
        if config.timeout().is_zero() {
            return Err(Error::config("Backend timeout cannot be 0"));
        }
        let http_client = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("tasker-mcp/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .network_context("Failed to build HTTP client")?;
        Ok(Self::with_client(config, http_client))
    }

    /// Create a client on top of an existing `reqwest::Client`
    pub fn with_client(config: BackendConfig, http_client: Client) -> Self {
        let url = config.run_task_url();
        Self {
            config,
            url,
            http_client,
        }
    }

    /// Task execution endpoint
    pub fn url(&self) -> &str {
        &self.url
    }

    fn request_error(&self, task_name: &str, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::network_with_source(
                format!(
                    "Task '{}' timed out after {:?} waiting for {}",
                    task_name,
                    self.config.timeout(),
                    self.url
                ),
                error,
            )
        } else {
            Error::network_with_source(
                format!("Request to {} failed for task '{}'", self.url, task_name),
                error,
            )
        }
    }
}

#[async_trait]
impl TaskBackend for TaskerClient {
    async fn run_task(&self, task_name: &str, arguments: &JsonObject) -> Result<String> {
        let payload = RunTaskRequest {
            name: task_name,
            arguments,
        };

        let mut request = self
            .http_client
            .post(&self.url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .json(&payload);
        if let Some(token) = self.config.bearer_token() {
            request = request.bearer_auth(token);
        }

        debug!(task = task_name, url = %self.url, "Running backend task");
        let response = request
            .send()
            .await
            .map_err(|e| self.request_error(task_name, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(
                task = task_name,
                status = status.as_u16(),
                "Backend task failed"
            );
            return Err(Error::backend(status.as_u16(), body));
        }

        response
            .text()
            .await
            .map_err(|e| self.request_error(task_name, e))
    }

    fn backend_name(&self) -> &str {
        "tasker"
    }
}
