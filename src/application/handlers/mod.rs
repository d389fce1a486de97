//! Application handlers, grouped by aggregate.

pub mod request;
