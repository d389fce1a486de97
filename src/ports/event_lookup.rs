//! Event lookup port (read side).
//!
//! Resolves an event's capacity configuration and ownership from the event
//! catalog. The catalog itself is an external collaborator; this core only
//! reads the slice needed for admission decisions.

use crate::domain::event::EventSummary;
use crate::domain::foundation::{DomainError, EventId};
use async_trait::async_trait;

/// Read-only port into the event catalog.
#[async_trait]
pub trait EventLookup: Send + Sync {
    /// Resolves an event's moderation-relevant view.
    ///
    /// Returns `None` if the event does not exist.
    async fn get_event(&self, event_id: &EventId) -> Result<Option<EventSummary>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_lookup_is_object_safe() {
        fn _accepts_dyn(_lookup: &dyn EventLookup) {}
    }
}
