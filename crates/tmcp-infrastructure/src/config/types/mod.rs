//! Configuration types module

pub mod app;
pub mod backend;
pub mod definitions;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use backend::BackendConfig;
pub use definitions::DefinitionsConfig;
pub use logging::LoggingConfig;
pub use server::{ServerConfig, TransportMode};
