//! ParticipationRequest entity.

use super::RequestStatus;
use crate::domain::foundation::{EventId, RequestId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A user's request to participate in an event.
///
/// Created by the requester; mutated only by the requester (cancel) or the
/// event's initiator (bulk status update). Requests are never deleted, only
/// transitioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationRequest {
    pub id: RequestId,
    pub event_id: EventId,
    pub requester_id: UserId,
    pub status: RequestStatus,
    pub created_at: Timestamp,
}

impl ParticipationRequest {
    /// Creates a new request with the status decided by the capacity policy.
    pub fn new(event_id: EventId, requester_id: UserId, status: RequestStatus) -> Self {
        Self {
            id: RequestId::new(),
            event_id,
            requester_id,
            status,
            created_at: Timestamp::now(),
        }
    }

    /// Returns true if the given user created this request.
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        &self.requester_id == user_id
    }
}
