//! # Tasker MCP Domain
//!
//! Core types and contracts for exposing Tasker tasks as MCP tools.
//!
//! The domain layer has no knowledge of transports, HTTP clients or
//! configuration files. It owns:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | Tool definitions as loaded from the definitions file |
//! | [`value_objects`] | Protocol-facing tool descriptors and primitive kinds |
//! | [`translator`] | Input schema to property descriptor translation |
//! | [`ports`] | Boundary contracts implemented by the infrastructure layer |
//! | [`error`] | Domain error type shared by every layer |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod translator;
pub mod value_objects;

pub use entities::{InputSchema, PropertySchema, ToolDefinition};
pub use error::{Error, Result};
pub use ports::{JsonObject, TaskBackend};
pub use translator::translate;
pub use value_objects::{PrimitiveKind, PropertyDescriptor, ToolDescriptor, TypeResolution};
