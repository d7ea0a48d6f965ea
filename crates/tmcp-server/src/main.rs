//! Tasker MCP - Tasker tasks as MCP tools
//!
//! ## Usage
//!
//! | Command | Description |
//! |---------|-------------|
//! | `tasker-mcp --tools tools.json` | Serve over stdio |
//! | `tasker-mcp --tools tools.json --mode sse --port 8000` | Serve over HTTP/SSE |
//! | `tasker-mcp convert export.xml -o tools.json` | Build definitions from a Tasker export |

use clap::Parser;
use tmcp_server::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse()).await
}
