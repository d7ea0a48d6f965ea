//! Configuration
//!
//! Typed application configuration and the layered loader that builds it.
//!
//! Sources, later overriding earlier:
//!
//! 1. Built-in defaults
//! 2. TOML file (`tmcp.toml`)
//! 3. Environment variables prefixed with `TMCP_` (`__` separates sections)
//! 4. Explicit overrides, usually command-line flags

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
