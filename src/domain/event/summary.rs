//! Event capacity read model.
//!
//! The event catalog itself lives outside this core; moderation only needs
//! the slice of an event that drives admission decisions: who owns it,
//! whether it is published, and how its capacity is configured.

use super::EventState;
use crate::domain::foundation::{EventId, UserId};
use serde::{Deserialize, Serialize};

/// Capacity configuration and ownership of a catalog event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: EventId,
    pub initiator_id: UserId,
    pub state: EventState,
    /// Maximum number of confirmed participants; 0 means unlimited.
    pub participant_limit: u32,
    /// Whether the initiator must approve requests manually.
    pub request_moderation: bool,
}

impl EventSummary {
    /// Returns true if the given user is the event's initiator.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.initiator_id == user_id
    }

    /// Returns true if this event has an effective moderation requirement.
    ///
    /// Unlimited events and events with moderation turned off auto-confirm
    /// every request, so there is nothing for the owner to moderate.
    pub fn requires_moderation(&self) -> bool {
        self.participant_limit != 0 && self.request_moderation
    }

    /// Returns true if the confirmed count has reached the limit.
    ///
    /// Always false for unlimited events.
    pub fn is_full(&self, confirmed_count: u32) -> bool {
        self.participant_limit != 0 && confirmed_count >= self.participant_limit
    }
}
