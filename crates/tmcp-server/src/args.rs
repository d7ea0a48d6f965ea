//! Command line arguments
//!
//! Every flag is optional and, when given, overrides the matching
//! configuration key.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tmcp_infrastructure::config::{ConfigLoader, TransportMode};

/// Command line interface for Tasker MCP
#[derive(Parser, Debug)]
#[command(name = "tasker-mcp")]
#[command(about = "Tasker MCP - expose Tasker tasks as MCP tools")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the JSON tool definitions file
    #[arg(long)]
    pub tools: Option<PathBuf>,

    /// Transport to serve (stdio or sse)
    #[arg(long)]
    pub mode: Option<TransportMode>,

    /// Host the SSE transport binds to
    #[arg(long)]
    pub host: Option<String>,

    /// Port the SSE transport listens on
    #[arg(long)]
    pub port: Option<u16>,

    /// Tasker backend host
    #[arg(long)]
    pub tasker_host: Option<String>,

    /// Tasker backend port
    #[arg(long)]
    pub tasker_port: Option<u16>,

    /// Bearer token for the Tasker backend
    #[arg(long)]
    pub tasker_api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a Tasker XML export into a tool definitions file
    Convert {
        /// Tasker XML export (project or task)
        xml: PathBuf,

        /// Write the definitions here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Configuration loader with these flags layered on top
    pub fn config_loader(&self) -> ConfigLoader {
        let loader = match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        };

        loader
            .with_override(
                "definitions.path",
                self.tools
                    .as_ref()
                    .map(|path| path.to_string_lossy().into_owned()),
            )
            .with_override("server.transport_mode", self.mode.map(TransportMode::as_str))
            .with_override("server.host", self.host.clone())
            .with_override("server.port", self.port)
            .with_override("backend.host", self.tasker_host.clone())
            .with_override("backend.port", self.tasker_port)
            .with_override("backend.api_key", self.tasker_api_key.clone())
            .with_override("logging.level", self.log_level.clone())
    }
}
