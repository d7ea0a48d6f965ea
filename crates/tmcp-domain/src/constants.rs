//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are shared by
//! the infrastructure and server layers. Infrastructure-specific constants
//! remain in `tmcp_infrastructure::constants`.

// ============================================================================
// SCHEMA CONSTANTS
// ============================================================================

/// JSON schema type for string properties
pub const SCHEMA_TYPE_STRING: &str = "string";

/// JSON schema type for number properties
pub const SCHEMA_TYPE_NUMBER: &str = "number";

/// JSON schema type of every tool input schema
pub const SCHEMA_TYPE_OBJECT: &str = "object";

// ============================================================================
// CALL DISPATCH CONSTANTS
// ============================================================================

/// Message returned to the caller when a tool call carries no arguments
pub const ARGUMENTS_REQUIRED_MESSAGE: &str = "Arguments must be provided";
