//! Domain Value Objects
//!
//! Immutable values derived from tool definitions.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ToolDescriptor`] | Protocol-facing description of a tool |
//! | [`PropertyDescriptor`] | One typed argument of a tool |
//! | [`PrimitiveKind`] | Argument kinds the protocol layer advertises |
//! | [`TypeResolution`] | How a schema `type` string maps to a kind |

pub mod tool_descriptor;

pub use tool_descriptor::{PrimitiveKind, PropertyDescriptor, ToolDescriptor, TypeResolution};
