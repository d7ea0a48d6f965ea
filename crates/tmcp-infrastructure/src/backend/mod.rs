//! Task Backend Adapters
//!
//! HTTP implementation of the domain [`TaskBackend`](tmcp_domain::TaskBackend)
//! port.

pub mod tasker_client;

pub use tasker_client::TaskerClient;
