//! # Infrastructure Layer
//!
//! Technical capabilities behind the Tasker MCP bridge.
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML, env, overrides) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Tool Sources
//! | Module | Description |
//! |--------|-------------|
//! | [`definitions`] | JSON tool definitions loader |
//! | [`tasker_xml`] | Tasker XML export to tool definitions |
//!
//! ### Backend
//! | Module | Description |
//! |--------|-------------|
//! | [`backend`] | HTTP client for the Tasker `/run_task` endpoint |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod backend;
pub mod config;
pub mod constants;
pub mod definitions;
pub mod error_ext;
pub mod logging;
pub mod tasker_xml;

// Re-export commonly used types
pub use backend::TaskerClient;
pub use config::{AppConfig, ConfigLoader};
pub use definitions::DefinitionLoader;
pub use error_ext::ErrorContext;
pub use tasker_xml::TaskerXmlConverter;
