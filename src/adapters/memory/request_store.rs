//! In-memory implementation of RequestStore.
//!
//! Backs unit and integration tests; also usable as a throwaway store for
//! local experiments. Preserves insertion order, which `find_by_ids` and the
//! event-scoped queries rely on for deterministic batch processing.

use crate::domain::foundation::{DomainError, EventId, RequestId, UserId};
use crate::domain::request::{ParticipationRequest, RequestStatus};
use crate::ports::RequestStore;
use async_trait::async_trait;
use std::sync::Mutex;

/// Vec-backed request store guarded by a mutex.
#[derive(Default)]
pub struct InMemoryRequestStore {
    requests: Mutex<Vec<ParticipationRequest>>,
}

impl InMemoryRequestStore {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Seeds the store with existing requests (test setup helper).
    pub fn with_requests(requests: Vec<ParticipationRequest>) -> Self {
        Self {
            requests: Mutex::new(requests),
        }
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<ParticipationRequest>> {
        self.requests.lock().expect("request store poisoned")
    }
}

#[async_trait]
impl RequestStore for InMemoryRequestStore {
    async fn exists_active(
        &self,
        event_id: &EventId,
        requester_id: &UserId,
    ) -> Result<bool, DomainError> {
        Ok(self.guard().iter().any(|r| {
            &r.event_id == event_id && &r.requester_id == requester_id && r.status.is_active()
        }))
    }

    async fn count_by_status(
        &self,
        event_id: &EventId,
        status: RequestStatus,
    ) -> Result<u32, DomainError> {
        let count = self
            .guard()
            .iter()
            .filter(|r| &r.event_id == event_id && r.status == status)
            .count();
        Ok(count as u32)
    }

    async fn save(&self, request: &ParticipationRequest) -> Result<(), DomainError> {
        let mut requests = self.guard();
        match requests.iter_mut().find(|r| r.id == request.id) {
            Some(existing) => *existing = request.clone(),
            None => requests.push(request.clone()),
        }
        Ok(())
    }

    async fn save_all(&self, updated: &[ParticipationRequest]) -> Result<(), DomainError> {
        let mut requests = self.guard();
        for request in updated {
            match requests.iter_mut().find(|r| r.id == request.id) {
                Some(existing) => *existing = request.clone(),
                None => requests.push(request.clone()),
            }
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &RequestId,
    ) -> Result<Option<ParticipationRequest>, DomainError> {
        Ok(self.guard().iter().find(|r| &r.id == id).cloned())
    }

    async fn find_by_ids(
        &self,
        ids: &[RequestId],
    ) -> Result<Vec<ParticipationRequest>, DomainError> {
        let requests = self.guard();
        // Preserve the caller's id order; missing ids are skipped.
        Ok(ids
            .iter()
            .filter_map(|id| requests.iter().find(|r| &r.id == id).cloned())
            .collect())
    }

    async fn find_by_requester(
        &self,
        requester_id: &UserId,
    ) -> Result<Vec<ParticipationRequest>, DomainError> {
        Ok(self
            .guard()
            .iter()
            .filter(|r| &r.requester_id == requester_id)
            .cloned()
            .collect())
    }

    async fn find_by_event(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<ParticipationRequest>, DomainError> {
        Ok(self
            .guard()
            .iter()
            .filter(|r| &r.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn find_by_event_and_status(
        &self,
        event_id: &EventId,
        status: RequestStatus,
    ) -> Result<Vec<ParticipationRequest>, DomainError> {
        Ok(self
            .guard()
            .iter()
            .filter(|r| &r.event_id == event_id && r.status == status)
            .cloned()
            .collect())
    }
}
