//! Tool definitions source configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the tool definitions are read from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionsConfig {
    /// Path to the JSON definitions file
    pub path: Option<PathBuf>,
}
