//! Server transport configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tmcp_domain::error::Error;

use crate::constants::{SERVER_DEFAULT_HOST, SERVER_DEFAULT_PORT};

/// Transport used to talk to the tool-calling host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// MCP over stdin/stdout
    #[default]
    Stdio,
    /// MCP over HTTP with Server-Sent Events
    Sse,
}

impl TransportMode {
    /// Configuration name of the mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
            Self::Sse => "sse",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "sse" => Ok(Self::Sse),
            _ => Err(Error::unsupported_transport(s)),
        }
    }
}

/// Transport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Transport mode
    #[serde(default)]
    pub transport_mode: TransportMode,
    /// Listen host for the SSE transport
    pub host: String,
    /// Listen port for the SSE transport
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport_mode: TransportMode::default(),
            host: SERVER_DEFAULT_HOST.to_string(),
            port: SERVER_DEFAULT_PORT,
        }
    }
}
