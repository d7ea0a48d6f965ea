//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{BackendConfig, DefinitionsConfig, LoggingConfig, ServerConfig};

/// Complete application configuration
///
/// Built once at startup and handed to the components that need it; nothing
/// reads configuration from process-wide state afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tool definitions source
    #[serde(default)]
    pub definitions: DefinitionsConfig,
    /// Task backend connection
    #[serde(default)]
    pub backend: BackendConfig,
    /// Tool-calling transport
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
