//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outside world. The
//! infrastructure layer provides the implementations; the server layer
//! depends on the traits only, which keeps test doubles trivial.

/// Backend task execution port
pub mod backend;

pub use backend::{JsonObject, SharedTaskBackend, TaskBackend};
