//! Error handling types

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Tasker MCP bridge
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// The tool definitions file does not exist
    #[error("Tool definitions file not found: {}", path.display())]
    DefinitionsNotFound {
        /// Location that was looked up
        path: PathBuf,
    },

    /// The tool definitions file is not an array of tool definition objects
    #[error("Malformed tool definitions: {message}")]
    MalformedDefinitions {
        /// Description of the format problem
        message: String,
    },

    /// Two definitions share the same external tool name
    #[error("Duplicate tool name: {name}")]
    DuplicateTool {
        /// The conflicting external name
        name: String,
    },

    /// A definition cannot be registered as a tool
    #[error("Invalid tool definition: {message}")]
    InvalidDefinition {
        /// Description of the problem
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a status other than 200
    #[error("Backend returned HTTP {status}: {body}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The caller cancelled the request before the backend answered
    #[error("Task '{task}' was cancelled")]
    Cancelled {
        /// Backend task name
        task: String,
    },

    /// Transport mode is not supported
    #[error("Unsupported transport mode: {mode}")]
    UnsupportedTransport {
        /// The requested mode
        mode: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Definition error creation methods
impl Error {
    /// Create a definitions-not-found error
    pub fn definitions_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::DefinitionsNotFound { path: path.into() }
    }

    /// Create a malformed definitions error
    pub fn malformed_definitions<S: Into<String>>(message: S) -> Self {
        Self::MalformedDefinitions {
            message: message.into(),
        }
    }

    /// Create a duplicate tool error
    pub fn duplicate_tool<S: Into<String>>(name: S) -> Self {
        Self::DuplicateTool { name: name.into() }
    }

    /// Create an invalid definition error
    pub fn invalid_definition<S: Into<String>>(message: S) -> Self {
        Self::InvalidDefinition {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create an unsupported transport error
    pub fn unsupported_transport<S: Into<String>>(mode: S) -> Self {
        Self::UnsupportedTransport { mode: mode.into() }
    }
}

// Backend error creation methods
impl Error {
    /// Create a backend status error
    pub fn backend<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Backend {
            status,
            body: body.into(),
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a cancellation error
    pub fn cancelled<S: Into<String>>(task: S) -> Self {
        Self::Cancelled { task: task.into() }
    }

    /// Whether the error came from the backend call rather than startup
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            Self::Backend { .. } | Self::Network { .. } | Self::Cancelled { .. }
        )
    }
}

// Internal error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
