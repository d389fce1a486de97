//! In-memory adapters, used by tests and local experiments.

mod request_store;

pub use request_store::InMemoryRequestStore;
