//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `tmcp_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tmcp.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tmcp";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TMCP";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// BACKEND CONSTANTS
// ============================================================================

/// Default Tasker backend host
pub const BACKEND_DEFAULT_HOST: &str = "0.0.0.0";

/// Default Tasker backend port
pub const BACKEND_DEFAULT_PORT: u16 = 1821;

/// Default backend request timeout in milliseconds
pub const BACKEND_DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Task execution endpoint path
pub const RUN_TASK_PATH: &str = "/run_task";

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default SSE transport listen host
pub const SERVER_DEFAULT_HOST: &str = "0.0.0.0";

/// Default SSE transport listen port
pub const SERVER_DEFAULT_PORT: u16 = 8000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "TMCP_LOG";

/// Log file name used when the configured path has no file stem
pub const DEFAULT_LOG_FILE_STEM: &str = "tmcp";
