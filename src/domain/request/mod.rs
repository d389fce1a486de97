//! Participation request domain module.
//!
//! # Module Structure
//!
//! - `request` - ParticipationRequest entity
//! - `status` - RequestStatus state machine
//! - `capacity` - EventCapacityPolicy admission decisions
//! - `errors` - RequestError taxonomy

mod capacity;
mod errors;
mod request;
mod status;

pub use capacity::{EventCapacityPolicy, StatusAction};
pub use errors::RequestError;
pub use request::ParticipationRequest;
pub use status::RequestStatus;
