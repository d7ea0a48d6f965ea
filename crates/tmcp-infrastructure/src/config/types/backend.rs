//! Task backend configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    BACKEND_DEFAULT_HOST, BACKEND_DEFAULT_PORT, BACKEND_DEFAULT_TIMEOUT_MS, RUN_TASK_PATH,
};

/// Task backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend host
    pub host: String,
    /// Backend port
    pub port: u16,
    /// Bearer token sent with every request, if set and non-empty
    pub api_key: Option<String>,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: BACKEND_DEFAULT_HOST.to_string(),
            port: BACKEND_DEFAULT_PORT,
            api_key: None,
            timeout_ms: BACKEND_DEFAULT_TIMEOUT_MS,
        }
    }
}

impl BackendConfig {
    /// Create a configuration for `host:port` with defaults elsewhere
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout, at millisecond precision
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Full URL of the task execution endpoint
    pub fn run_task_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, RUN_TASK_PATH)
    }

    /// API key, ignoring an empty value
    pub fn bearer_token(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
