//! Server Initialization
//!
//! Handles configuration, logging, tool registration and transport startup.
//!
//! # Transport Modes
//!
//! The transport is selected by `server.transport_mode`:
//!
//! - **Stdio**: MCP protocol over stdin/stdout (default)
//! - **Sse**: HTTP with Server-Sent Events sessions
//!
//! # Configuration
//!
//! Transport mode can be set via:
//! - Config file: `server.transport_mode = "sse"`
//! - Environment variable: `TMCP_SERVER__TRANSPORT_MODE=sse`
//! - Command line: `--mode sse`

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use tmcp_domain::error::Error;
use tmcp_domain::ports::SharedTaskBackend;
use tmcp_infrastructure::config::{AppConfig, ServerConfig, TransportMode};
use tmcp_infrastructure::logging::init_logging;
use tmcp_infrastructure::{DefinitionLoader, ErrorContext, TaskerClient, TaskerXmlConverter};

use crate::McpServer;
use crate::McpServerBuilder;
use crate::args::{Cli, Command};
use crate::transport::http::{HttpTransport, HttpTransportConfig};
use crate::transport::stdio::StdioServerExt;

/// Run the command selected on the command line
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Some(Command::Convert { xml, output }) => convert(xml, output.as_deref()),
        None => {
            let config = cli.config_loader().load()?;
            run_server(config).await
        }
    }
}

/// Run the Tasker MCP server
///
/// Initializes logging, loads the tool definitions and serves them over the
/// configured transport until the transport finishes.
pub async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&config.logging)?;

    info!(
        transport_mode = %config.server.transport_mode,
        backend = %config.backend.run_task_url(),
        "Starting Tasker MCP server"
    );

    let server = create_mcp_server(&config)?;
    info!(
        tools = server.registry().len(),
        "MCP server initialized successfully"
    );

    start_transport(server, &config.server).await
}

/// Create the MCP server from configuration
pub fn create_mcp_server(config: &AppConfig) -> Result<McpServer, Box<dyn std::error::Error>> {
    let path = config
        .definitions
        .path
        .as_deref()
        .ok_or_else(|| Error::config("Tool definitions path is required"))?;
    let definitions = DefinitionLoader::load(path)?;
    let backend: SharedTaskBackend = Arc::new(TaskerClient::new(config.backend.clone())?);

    Ok(McpServerBuilder::new()
        .with_definitions(definitions)
        .with_backend(backend)
        .build()?)
}

/// Start the configured transport
async fn start_transport(
    server: McpServer,
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match config.transport_mode {
        TransportMode::Stdio => {
            info!("Starting stdio transport");
            server.serve_stdio().await?;
        }
        TransportMode::Sse => {
            info!(host = %config.host, port = config.port, "Starting SSE transport");
            let http_config = HttpTransportConfig {
                host: config.host.clone(),
                port: config.port,
                enable_cors: true,
            };
            HttpTransport::new(http_config, Arc::new(server))
                .start()
                .await?;
        }
    }
    Ok(())
}

/// Convert a Tasker XML export into a definitions file
///
/// Writes to `output` when given, stdout otherwise.
pub fn convert(xml: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(xml)
        .io_context(format!("Failed to read Tasker export {}", xml.display()))?;
    let json = TaskerXmlConverter::convert_to_json(&content)?;

    match output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .io_context(format!("Failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
