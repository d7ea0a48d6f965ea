//! # Tasker MCP Server
//!
//! MCP protocol server exposing Tasker tasks as tools.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clap::Parser;
//! use tmcp_server::{Cli, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run(Cli::parse()).await
//! }
//! ```
//!
//! ## Architecture
//!
//! This crate implements the transport and protocol layer. Tool definitions
//! and the backend client come from the infrastructure crate; the server
//! only depends on the domain's `TaskBackend` port.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`McpServer`] | Main server struct |
//! | [`McpServerBuilder`] | Builder for server configuration |
//! | [`tools::ToolRegistry`] | Registered tools and their handlers |

// Allow Rust 2024 compatibility issues from Rocket's EventStream macro
#![allow(rust_2024_compatibility)]

pub mod args;
pub mod builder;
pub mod constants;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod session;
pub mod tools;
pub mod transport;

// Re-export core types for public API
pub use args::Cli;
pub use builder::{BuilderError, McpServerBuilder};
pub use init::{run, run_server};
pub use mcp_server::McpServer;
