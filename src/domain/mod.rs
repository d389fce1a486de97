//! Domain layer - entities, value objects, and decision logic.

pub mod event;
pub mod foundation;
pub mod request;
