//! MCP Tool Handlers
//!
//! One handler per registered tool. Each translates a tool call into a
//! backend task run.

pub mod task_tool;

pub use task_tool::TaskToolHandler;
