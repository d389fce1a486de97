//! Adapters binding the application's ports to the outside world.

pub mod http;
pub mod memory;
pub mod postgres;
