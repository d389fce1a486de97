//! Participation request status state machine.
//!
//! Defines the lifecycle of a participation request under owner moderation.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Status of a participation request.
///
/// The initial status is decided at creation time by the capacity policy:
/// `Confirmed` when the event auto-confirms, otherwise `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// Awaiting a decision by the event initiator.
    Pending,

    /// Admitted; counts against the event's participant limit.
    Confirmed,

    /// Declined by the initiator, or auto-rejected once capacity ran out.
    Rejected,

    /// Withdrawn by the requester.
    Canceled,
}

impl RequestStatus {
    /// Returns true if this request still occupies the moderation queue.
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    /// Returns true if this request blocks the requester from submitting
    /// another request for the same event.
    ///
    /// Only cancellation frees the (event, requester) slot.
    pub fn is_active(&self) -> bool {
        !matches!(self, RequestStatus::Canceled)
    }
}

impl StateMachine for RequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RequestStatus::*;
        matches!(
            (self, target),
            (Pending, Confirmed) | (Pending, Rejected) | (Pending, Canceled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RequestStatus::*;
        match self {
            Pending => vec![Confirmed, Rejected, Canceled],
            Confirmed => vec![],
            Rejected => vec![],
            Canceled => vec![],
        }
    }
}
