//! ListEventRequestsHandler - Query handler for the owner's view.

use std::sync::Arc;

use crate::domain::foundation::{EventId, UserId};
use crate::domain::request::{ParticipationRequest, RequestError};
use crate::ports::{EventLookup, RequestStore};

/// Query for all requests targeting one of the owner's events.
#[derive(Debug, Clone)]
pub struct ListEventRequestsQuery {
    pub owner_id: UserId,
    pub event_id: EventId,
}

/// Handler returning an event's participation requests to its initiator.
pub struct ListEventRequestsHandler {
    store: Arc<dyn RequestStore>,
    events: Arc<dyn EventLookup>,
}

impl ListEventRequestsHandler {
    pub fn new(store: Arc<dyn RequestStore>, events: Arc<dyn EventLookup>) -> Self {
        Self { store, events }
    }

    pub async fn handle(
        &self,
        query: ListEventRequestsQuery,
    ) -> Result<Vec<ParticipationRequest>, RequestError> {
        let event = self
            .events
            .get_event(&query.event_id)
            .await?
            .ok_or(RequestError::event_not_found(query.event_id))?;

        if !event.is_owned_by(&query.owner_id) {
            return Err(RequestError::not_event_owner(query.event_id, query.owner_id));
        }

        Ok(self.store.find_by_event(&query.event_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRequestStore;
    use crate::domain::event::{EventState, EventSummary};
    use crate::domain::foundation::DomainError;
    use crate::domain::request::RequestStatus;
    use async_trait::async_trait;

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

    fn owned_event(initiator_id: UserId) -> EventSummary {
        EventSummary {
            id: EventId::new(),
            initiator_id,
            state: EventState::Published,
            participant_limit: 10,
            request_moderation: true,
        }
    }

    #[tokio::test]
    async fn owner_sees_all_event_requests() {
        let owner = UserId::new();
        let event = owned_event(owner);
        let for_event =
            ParticipationRequest::new(event.id, UserId::new(), RequestStatus::Pending);
        let other_event =
            ParticipationRequest::new(EventId::new(), UserId::new(), RequestStatus::Pending);
        let store = Arc::new(InMemoryRequestStore::with_requests(vec![
            for_event.clone(),
            other_event,
        ]));
        let handler = ListEventRequestsHandler::new(
            store,
            Arc::new(MockEventLookup {
                event: Some(event.clone()),
            }),
        );

        let requests = handler
            .handle(ListEventRequestsQuery {
                owner_id: owner,
                event_id: event.id,
            })
            .await
            .unwrap();

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, for_event.id);
    }

    #[tokio::test]
    async fn fails_when_event_missing() {
        let handler = ListEventRequestsHandler::new(
            Arc::new(InMemoryRequestStore::new()),
            Arc::new(MockEventLookup { event: None }),
        );

        let result = handler
            .handle(ListEventRequestsQuery {
                owner_id: UserId::new(),
                event_id: EventId::new(),
            })
            .await;

        assert!(matches!(result, Err(RequestError::EventNotFound(_))));
    }

    #[tokio::test]
    async fn non_owner_is_rejected() {
        let event = owned_event(UserId::new());
        let handler = ListEventRequestsHandler::new(
            Arc::new(InMemoryRequestStore::new()),
            Arc::new(MockEventLookup {
                event: Some(event.clone()),
            }),
        );

        let result = handler
            .handle(ListEventRequestsQuery {
                owner_id: UserId::new(),
                event_id: event.id,
            })
            .await;

        assert!(matches!(result, Err(RequestError::NotEventOwner { .. })));
    }
}
