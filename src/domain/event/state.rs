//! Event publication state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Publication state of a catalog event.
///
/// Participation requests may only be created against `Published` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventState {
    /// Submitted by the initiator, awaiting admin review.
    Pending,

    /// Visible in public listings and open for participation requests.
    Published,

    /// Withdrawn by the initiator or rejected by review.
    Canceled,
}

impl EventState {
    /// Returns true if the event accepts participation requests.
    pub fn accepts_requests(&self) -> bool {
        matches!(self, EventState::Published)
    }
}

impl StateMachine for EventState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EventState::*;
        matches!((self, target), (Pending, Published) | (Pending, Canceled))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EventState::*;
        match self {
            Pending => vec![Published, Canceled],
            Published => vec![],
            Canceled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_published() {
        let result = EventState::Pending.transition_to(EventState::Published);
        assert_eq!(result, Ok(EventState::Published));
    }

    #[test]
    fn pending_can_be_canceled() {
        let result = EventState::Pending.transition_to(EventState::Canceled);
        assert_eq!(result, Ok(EventState::Canceled));
    }

    #[test]
    fn published_is_terminal() {
        assert!(EventState::Published.is_terminal());
        assert!(!EventState::Published.can_transition_to(&EventState::Canceled));
    }

    #[test]
    fn only_published_accepts_requests() {
        assert!(EventState::Published.accepts_requests());
        assert!(!EventState::Pending.accepts_requests());
        assert!(!EventState::Canceled.accepts_requests());
    }
}
