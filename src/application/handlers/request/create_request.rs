//! CreateRequestHandler - Command handler for submitting participation requests.

use std::sync::Arc;

use crate::application::locks::EventLockMap;
use crate::domain::foundation::{EventId, UserId};
use crate::domain::request::{
    EventCapacityPolicy, ParticipationRequest, RequestError, RequestStatus,
};
use crate::ports::{EventLookup, RequestStore, UserLookup};

/// Command to request participation in an event.
#[derive(Debug, Clone)]
pub struct CreateRequestCommand {
    pub requester_id: UserId,
    pub event_id: EventId,
}

/// Handler for creating participation requests.
///
/// Holds the event's lock across the confirmed-count read and the insert so
/// concurrent creations cannot jointly over-admit past the limit.
pub struct CreateRequestHandler {
    store: Arc<dyn RequestStore>,
    events: Arc<dyn EventLookup>,
    users: Arc<dyn UserLookup>,
    locks: Arc<EventLockMap>,
}

impl CreateRequestHandler {
    pub fn new(
        store: Arc<dyn RequestStore>,
        events: Arc<dyn EventLookup>,
        users: Arc<dyn UserLookup>,
        locks: Arc<EventLockMap>,
    ) -> Self {
        Self {
            store,
            events,
            users,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateRequestCommand,
    ) -> Result<ParticipationRequest, RequestError> {
        // 1. Both parties must exist
        if !self.users.exists(&cmd.requester_id).await? {
            return Err(RequestError::user_not_found(cmd.requester_id));
        }
        let event = self
            .events
            .get_event(&cmd.event_id)
            .await?
            .ok_or(RequestError::event_not_found(cmd.event_id))?;

        // 2. Business-rule gates
        if event.is_owned_by(&cmd.requester_id) {
            return Err(RequestError::own_event(cmd.event_id));
        }
        if !event.state.accepts_requests() {
            return Err(RequestError::event_not_published(cmd.event_id));
        }

        // 3. Ledger read + decision + insert under the event's lock
        let _guard = self.locks.acquire(cmd.event_id).await;

        if self
            .store
            .exists_active(&cmd.event_id, &cmd.requester_id)
            .await?
        {
            return Err(RequestError::duplicate_request(
                cmd.event_id,
                cmd.requester_id,
            ));
        }

        let confirmed_count = self
            .store
            .count_by_status(&cmd.event_id, RequestStatus::Confirmed)
            .await?;
        let status = EventCapacityPolicy::decide_initial_status(
            event.participant_limit,
            event.request_moderation,
            confirmed_count,
        );
        if status == RequestStatus::Rejected {
            // Surfaced as a conflict, never stored as a rejected record.
            return Err(RequestError::limit_reached(cmd.event_id));
        }

        let request = ParticipationRequest::new(cmd.event_id, cmd.requester_id, status);
        self.store.save(&request).await?;

        tracing::info!(
            request_id = %request.id,
            event_id = %request.event_id,
            status = ?request.status,
            "participation request created"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRequestStore;
    use crate::domain::event::{EventState, EventSummary};
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct MockEventLookup {
        event: Option<EventSummary>,
    }

    #[async_trait]
    impl EventLookup for MockEventLookup {
        async fn get_event(
            &self,
            event_id: &EventId,
        ) -> Result<Option<EventSummary>, DomainError> {
            Ok(self.event.clone().filter(|e| &e.id == event_id))
        }
    }

    struct MockUserLookup {
        known: Mutex<HashSet<UserId>>,
    }

    impl MockUserLookup {
        fn knowing(users: &[UserId]) -> Self {
            Self {
                known: Mutex::new(users.iter().copied().collect()),
            }
        }
    }

    #[async_trait]
    impl UserLookup for MockUserLookup {
        async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError> {
            Ok(self.known.lock().unwrap().contains(user_id))
        }
    }

    fn published_event(initiator_id: UserId, limit: u32, moderation: bool) -> EventSummary {
        EventSummary {
            id: EventId::new(),
            initiator_id,
            state: EventState::Published,
            participant_limit: limit,
            request_moderation: moderation,
        }
    }

    fn handler(
        store: Arc<InMemoryRequestStore>,
        event: EventSummary,
        users: &[UserId],
    ) -> CreateRequestHandler {
        CreateRequestHandler::new(
            store,
            Arc::new(MockEventLookup { event: Some(event) }),
            Arc::new(MockUserLookup::knowing(users)),
            Arc::new(EventLockMap::new()),
        )
    }

    #[tokio::test]
    async fn moderated_event_with_room_creates_pending_request() {
        let requester = UserId::new();
        let event = published_event(UserId::new(), 5, true);
        let store = Arc::new(InMemoryRequestStore::new());
        let handler = handler(store.clone(), event.clone(), &[requester]);

        let request = handler
            .handle(CreateRequestCommand {
                requester_id: requester,
                event_id: event.id,
            })
            .await
            .unwrap();

        assert_eq!(request.status, RequestStatus::Pending);
        assert!(store.find_by_id(&request.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unlimited_event_auto_confirms() {
        let requester = UserId::new();
        let event = published_event(UserId::new(), 0, true);
        let handler = handler(
            Arc::new(InMemoryRequestStore::new()),
            event.clone(),
            &[requester],
        );

        let request = handler
            .handle(CreateRequestCommand {
                requester_id: requester,
                event_id: event.id,
            })
            .await
            .unwrap();

        assert_eq!(request.status, RequestStatus::Confirmed);
    }

    #[tokio::test]
    async fn unmoderated_event_auto_confirms() {
        let requester = UserId::new();
        let event = published_event(UserId::new(), 3, false);
        let handler = handler(
            Arc::new(InMemoryRequestStore::new()),
            event.clone(),
            &[requester],
        );

        let request = handler
            .handle(CreateRequestCommand {
                requester_id: requester,
                event_id: event.id,
            })
            .await
            .unwrap();

        assert_eq!(request.status, RequestStatus::Confirmed);
    }

    #[tokio::test]
    async fn fails_when_requester_unknown() {
        let event = published_event(UserId::new(), 5, true);
        let handler = handler(Arc::new(InMemoryRequestStore::new()), event.clone(), &[]);

        let result = handler
            .handle(CreateRequestCommand {
                requester_id: UserId::new(),
                event_id: event.id,
            })
            .await;

        assert!(matches!(result, Err(RequestError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn fails_when_event_missing() {
        let requester = UserId::new();
        let handler = CreateRequestHandler::new(
            Arc::new(InMemoryRequestStore::new()),
            Arc::new(MockEventLookup { event: None }),
            Arc::new(MockUserLookup::knowing(&[requester])),
            Arc::new(EventLockMap::new()),
        );

        let result = handler
            .handle(CreateRequestCommand {
                requester_id: requester,
                event_id: EventId::new(),
            })
            .await;

        assert!(matches!(result, Err(RequestError::EventNotFound(_))));
    }

    #[tokio::test]
    async fn initiator_cannot_request_own_event() {
        let initiator = UserId::new();
        let event = published_event(initiator, 5, true);
        let handler = handler(
            Arc::new(InMemoryRequestStore::new()),
            event.clone(),
            &[initiator],
        );

        let result = handler
            .handle(CreateRequestCommand {
                requester_id: initiator,
                event_id: event.id,
            })
            .await;

        assert!(matches!(result, Err(RequestError::OwnEvent(_))));
    }

    #[tokio::test]
    async fn unpublished_event_rejects_requests() {
        let requester = UserId::new();
        let mut event = published_event(UserId::new(), 5, true);
        event.state = EventState::Pending;
        let handler = handler(
            Arc::new(InMemoryRequestStore::new()),
            event.clone(),
            &[requester],
        );

        let result = handler
            .handle(CreateRequestCommand {
                requester_id: requester,
                event_id: event.id,
            })
            .await;

        assert!(matches!(result, Err(RequestError::EventNotPublished(_))));
    }

    #[tokio::test]
    async fn duplicate_active_request_conflicts() {
        let requester = UserId::new();
        let event = published_event(UserId::new(), 5, true);
        let store = Arc::new(InMemoryRequestStore::new());
        let handler = handler(store, event.clone(), &[requester]);
        let cmd = CreateRequestCommand {
            requester_id: requester,
            event_id: event.id,
        };

        handler.handle(cmd.clone()).await.unwrap();
        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(RequestError::DuplicateRequest { .. })));
    }

    #[tokio::test]
    async fn new_request_succeeds_after_cancellation() {
        let requester = UserId::new();
        let event = published_event(UserId::new(), 5, true);
        let store = Arc::new(InMemoryRequestStore::new());
        let handler = handler(store.clone(), event.clone(), &[requester]);
        let cmd = CreateRequestCommand {
            requester_id: requester,
            event_id: event.id,
        };

        let mut first = handler.handle(cmd.clone()).await.unwrap();
        first.status = RequestStatus::Canceled;
        store.save(&first).await.unwrap();

        assert!(handler.handle(cmd).await.is_ok());
    }

    #[tokio::test]
    async fn full_event_conflicts_without_persisting() {
        let requester = UserId::new();
        let event = published_event(UserId::new(), 1, true);
        let mut occupant =
            ParticipationRequest::new(event.id, UserId::new(), RequestStatus::Confirmed);
        occupant.status = RequestStatus::Confirmed;
        let store = Arc::new(InMemoryRequestStore::with_requests(vec![occupant]));
        let handler = handler(store.clone(), event.clone(), &[requester]);

        let result = handler
            .handle(CreateRequestCommand {
                requester_id: requester,
                event_id: event.id,
            })
            .await;

        assert!(matches!(result, Err(RequestError::LimitReached(_))));
        // No rejected record is stored for the losing requester.
        assert!(store
            .find_by_requester(&requester)
            .await
            .unwrap()
            .is_empty());
    }
}
