//! Request store port.
//!
//! Owns the persisted set of participation requests. Implementations must
//! preserve the capacity ledger's consistency: `count_by_status` reads feed
//! admission decisions, so they must be serialized with the writes that
//! consume them (the application layer scopes that serialization per event).

use crate::domain::foundation::{DomainError, EventId, RequestId, UserId};
use crate::domain::request::{ParticipationRequest, RequestStatus};
use async_trait::async_trait;

/// Persistence port for participation requests.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Returns true if a non-canceled request exists for this pair.
    async fn exists_active(
        &self,
        event_id: &EventId,
        requester_id: &UserId,
    ) -> Result<bool, DomainError>;

    /// Counts an event's requests in the given status.
    ///
    /// With `RequestStatus::Confirmed` this is the live capacity ledger.
    async fn count_by_status(
        &self,
        event_id: &EventId,
        status: RequestStatus,
    ) -> Result<u32, DomainError>;

    /// Persists a request (insert or status update).
    async fn save(&self, request: &ParticipationRequest) -> Result<(), DomainError>;

    /// Persists a batch of status changes.
    async fn save_all(&self, requests: &[ParticipationRequest]) -> Result<(), DomainError>;

    /// Finds a request by id. Returns `None` if missing.
    async fn find_by_id(&self, id: &RequestId)
        -> Result<Option<ParticipationRequest>, DomainError>;

    /// Finds the requests with the given ids; missing ids are skipped.
    async fn find_by_ids(&self, ids: &[RequestId])
        -> Result<Vec<ParticipationRequest>, DomainError>;

    /// All requests created by a user, any status.
    async fn find_by_requester(
        &self,
        requester_id: &UserId,
    ) -> Result<Vec<ParticipationRequest>, DomainError>;

    /// All requests targeting an event, any status.
    async fn find_by_event(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<ParticipationRequest>, DomainError>;

    /// An event's requests in the given status.
    async fn find_by_event_and_status(
        &self,
        event_id: &EventId,
        status: RequestStatus,
    ) -> Result<Vec<ParticipationRequest>, DomainError>;
}
