//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventLookup` - Read-only view into the event catalog
//! - `UserLookup` - Requester/owner identity validation
//! - `RequestStore` - Persistence of participation requests

mod event_lookup;
mod request_store;
mod user_lookup;

pub use event_lookup::EventLookup;
pub use request_store::RequestStore;
pub use user_lookup::UserLookup;
