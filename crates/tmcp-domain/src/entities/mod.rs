//! Domain Entities
//!
//! Tool definitions as they are loaded from the definitions file. A
//! definition is immutable once loaded; everything the protocol layer needs
//! is derived from it.

pub mod tool_definition;

pub use tool_definition::{InputSchema, PropertySchema, ToolDefinition};
