//! HTTP adapters - REST API implementations.

pub mod request;

// Re-export key types for convenience
pub use request::request_routes;
pub use request::RequestAppState;
