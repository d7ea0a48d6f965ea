//! MCP Tools Module
//!
//! - registry.rs - Tool registration and schema publication
//! - router.rs - Tool dispatch and routing

pub mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::route_tool_call;
