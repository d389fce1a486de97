//! Application layer: use-case handlers and cross-cutting coordination.

pub mod handlers;
pub mod locks;
