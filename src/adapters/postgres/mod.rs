//! PostgreSQL adapters - sqlx implementations of the storage ports.

mod event_lookup;
mod request_store;
mod user_lookup;

pub use event_lookup::PostgresEventLookup;
pub use request_store::PostgresRequestStore;
pub use user_lookup::PostgresUserLookup;
