//! Event domain module.
//!
//! Read-side view of the external event catalog: publication state and the
//! capacity configuration consulted by the moderation workflow.

mod state;
mod summary;

pub use state::EventState;
pub use summary::EventSummary;
