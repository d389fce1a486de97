//! CancelRequestHandler - Command handler for withdrawing a request.

use std::sync::Arc;

use crate::application::locks::EventLockMap;
use crate::domain::foundation::{RequestId, UserId};
use crate::domain::request::{ParticipationRequest, RequestError, RequestStatus};
use crate::ports::RequestStore;

/// Command to cancel one's own participation request.
#[derive(Debug, Clone)]
pub struct CancelRequestCommand {
    pub requester_id: UserId,
    pub request_id: RequestId,
}

/// Handler for canceling participation requests.
pub struct CancelRequestHandler {
    store: Arc<dyn RequestStore>,
    locks: Arc<EventLockMap>,
}

impl CancelRequestHandler {
    pub fn new(store: Arc<dyn RequestStore>, locks: Arc<EventLockMap>) -> Self {
        Self { store, locks }
    }

    /// Cancels the request unconditionally.
    ///
    /// Cancellation is a requester override, not a moderated transition:
    /// even a confirmed request may be withdrawn, freeing its capacity slot.
    /// Canceling an already-canceled request is an accepted no-op.
    ///
    /// The write happens under the event's lock. A concurrent bulk update
    /// batch-writes this request's status, so the cancellation must land
    /// strictly before or strictly after that batch, never inside it.
    pub async fn handle(
        &self,
        cmd: CancelRequestCommand,
    ) -> Result<ParticipationRequest, RequestError> {
        let found = self
            .store
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or(RequestError::request_not_found(cmd.request_id))?;

        if !found.belongs_to(&cmd.requester_id) {
            return Err(RequestError::not_request_owner(
                cmd.request_id,
                cmd.requester_id,
            ));
        }

        let _guard = self.locks.acquire(found.event_id).await;

        // Re-read now that the lock is held; a moderation batch may have
        // rewritten the status between the first read and here.
        let mut request = self
            .store
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or(RequestError::request_not_found(cmd.request_id))?;

        if request.status == RequestStatus::Canceled {
            return Ok(request);
        }

        request.status = RequestStatus::Canceled;
        self.store.save(&request).await?;

        tracing::info!(request_id = %request.id, "participation request canceled");

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRequestStore;
    use crate::domain::foundation::EventId;

    fn request_with_status(requester_id: UserId, status: RequestStatus) -> ParticipationRequest {
        let mut request =
            ParticipationRequest::new(EventId::new(), requester_id, RequestStatus::Pending);
        request.status = status;
        request
    }

    fn handler_with(store: Arc<InMemoryRequestStore>) -> CancelRequestHandler {
        CancelRequestHandler::new(store, Arc::new(EventLockMap::new()))
    }

    #[tokio::test]
    async fn cancels_pending_request() {
        let requester = UserId::new();
        let request = request_with_status(requester, RequestStatus::Pending);
        let store = Arc::new(InMemoryRequestStore::with_requests(vec![request.clone()]));
        let handler = handler_with(store.clone());

        let canceled = handler
            .handle(CancelRequestCommand {
                requester_id: requester,
                request_id: request.id,
            })
            .await
            .unwrap();

        assert_eq!(canceled.status, RequestStatus::Canceled);
        let stored = store.find_by_id(&request.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Canceled);
    }

    #[tokio::test]
    async fn cancels_confirmed_request() {
        let requester = UserId::new();
        let request = request_with_status(requester, RequestStatus::Confirmed);
        let store = Arc::new(InMemoryRequestStore::with_requests(vec![request.clone()]));
        let handler = handler_with(store);

        let canceled = handler
            .handle(CancelRequestCommand {
                requester_id: requester,
                request_id: request.id,
            })
            .await
            .unwrap();

        assert_eq!(canceled.status, RequestStatus::Canceled);
    }

    #[tokio::test]
    async fn canceling_already_canceled_is_a_no_op() {
        let requester = UserId::new();
        let request = request_with_status(requester, RequestStatus::Canceled);
        let store = Arc::new(InMemoryRequestStore::with_requests(vec![request.clone()]));
        let handler = handler_with(store);

        let result = handler
            .handle(CancelRequestCommand {
                requester_id: requester,
                request_id: request.id,
            })
            .await
            .unwrap();

        assert_eq!(result.status, RequestStatus::Canceled);
    }

    #[tokio::test]
    async fn fails_when_request_missing() {
        let handler = handler_with(Arc::new(InMemoryRequestStore::new()));

        let result = handler
            .handle(CancelRequestCommand {
                requester_id: UserId::new(),
                request_id: RequestId::new(),
            })
            .await;

        assert!(matches!(result, Err(RequestError::RequestNotFound(_))));
    }

    #[tokio::test]
    async fn fails_when_request_belongs_to_someone_else() {
        let request = request_with_status(UserId::new(), RequestStatus::Pending);
        let store = Arc::new(InMemoryRequestStore::with_requests(vec![request.clone()]));
        let handler = handler_with(store.clone());

        let result = handler
            .handle(CancelRequestCommand {
                requester_id: UserId::new(),
                request_id: request.id,
            })
            .await;

        assert!(matches!(result, Err(RequestError::NotRequestOwner { .. })));
        let stored = store.find_by_id(&request.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Pending);
    }

    #[tokio::test]
    async fn waits_for_a_held_event_lock_before_writing() {
        let requester = UserId::new();
        let request = request_with_status(requester, RequestStatus::Pending);
        let event_id = request.event_id;
        let store = Arc::new(InMemoryRequestStore::with_requests(vec![request.clone()]));
        let locks = Arc::new(EventLockMap::new());
        let handler = Arc::new(CancelRequestHandler::new(store.clone(), locks.clone()));

        let guard = locks.acquire(event_id).await;
        let request_id = request.id;
        let task = tokio::spawn({
            let handler = handler.clone();
            async move {
                handler
                    .handle(CancelRequestCommand {
                        requester_id: requester,
                        request_id,
                    })
                    .await
            }
        });

        tokio::task::yield_now().await;
        assert!(!task.is_finished());
        let stored = store.find_by_id(&request.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Pending);

        drop(guard);
        let canceled = task.await.unwrap().unwrap();
        assert_eq!(canceled.status, RequestStatus::Canceled);
    }
}
