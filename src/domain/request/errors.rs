//! Participation request error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UserNotFound, EventNotFound, RequestNotFound | 404 |
//! | OwnEvent, EventNotPublished, DuplicateRequest | 409 |
//! | LimitReached, NotEventOwner, NotRequestOwner | 409 |
//! | ModerationNotRequired, NotPending | 409 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, EventId, RequestId, UserId};

/// Errors produced by the moderation workflow.
///
/// `NotFound` variants indicate a missing referenced entity; the remaining
/// variants are business-rule conflicts. Neither is ever retried or
/// silently downgraded. Storage failures propagate as `Infrastructure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Referenced user does not exist.
    UserNotFound(UserId),

    /// Referenced event does not exist.
    EventNotFound(EventId),

    /// Referenced request does not exist.
    RequestNotFound(RequestId),

    /// Initiators cannot request participation in their own event.
    OwnEvent(EventId),

    /// Requests may only target published events.
    EventNotPublished(EventId),

    /// An active (non-canceled) request already exists for this pair.
    DuplicateRequest { event_id: EventId, requester_id: UserId },

    /// The event's participant limit is already exhausted.
    LimitReached(EventId),

    /// Only the event's initiator may view or moderate its requests.
    NotEventOwner { event_id: EventId, user_id: UserId },

    /// The request belongs to a different user.
    NotRequestOwner { request_id: RequestId, user_id: UserId },

    /// The event auto-confirms requests; there is nothing to moderate.
    ModerationNotRequired(EventId),

    /// A bulk batch referenced a request that is not pending.
    NotPending(RequestId),

    /// Storage failure, propagated unchanged.
    Infrastructure(String),
}

impl RequestError {
    pub fn user_not_found(user_id: UserId) -> Self {
        RequestError::UserNotFound(user_id)
    }

    pub fn event_not_found(event_id: EventId) -> Self {
        RequestError::EventNotFound(event_id)
    }

    pub fn request_not_found(request_id: RequestId) -> Self {
        RequestError::RequestNotFound(request_id)
    }

    pub fn own_event(event_id: EventId) -> Self {
        RequestError::OwnEvent(event_id)
    }

    pub fn event_not_published(event_id: EventId) -> Self {
        RequestError::EventNotPublished(event_id)
    }

    pub fn duplicate_request(event_id: EventId, requester_id: UserId) -> Self {
        RequestError::DuplicateRequest {
            event_id,
            requester_id,
        }
    }

    pub fn limit_reached(event_id: EventId) -> Self {
        RequestError::LimitReached(event_id)
    }

    pub fn not_event_owner(event_id: EventId, user_id: UserId) -> Self {
        RequestError::NotEventOwner { event_id, user_id }
    }

    pub fn not_request_owner(request_id: RequestId, user_id: UserId) -> Self {
        RequestError::NotRequestOwner { request_id, user_id }
    }

    pub fn moderation_not_required(event_id: EventId) -> Self {
        RequestError::ModerationNotRequired(event_id)
    }

    pub fn not_pending(request_id: RequestId) -> Self {
        RequestError::NotPending(request_id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RequestError::Infrastructure(message.into())
    }

    /// Returns true for missing-entity errors (mapped to 404).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RequestError::UserNotFound(_)
                | RequestError::EventNotFound(_)
                | RequestError::RequestNotFound(_)
        )
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RequestError::UserNotFound(_) => ErrorCode::UserNotFound,
            RequestError::EventNotFound(_) => ErrorCode::EventNotFound,
            RequestError::RequestNotFound(_) => ErrorCode::RequestNotFound,
            RequestError::OwnEvent(_) => ErrorCode::OwnEventRequest,
            RequestError::EventNotPublished(_) => ErrorCode::EventNotPublished,
            RequestError::DuplicateRequest { .. } => ErrorCode::RequestExists,
            RequestError::LimitReached(_) => ErrorCode::ParticipantLimitReached,
            RequestError::NotEventOwner { .. } => ErrorCode::NotEventOwner,
            RequestError::NotRequestOwner { .. } => ErrorCode::NotRequestOwner,
            RequestError::ModerationNotRequired(_) => ErrorCode::ModerationNotRequired,
            RequestError::NotPending(_) => ErrorCode::RequestNotPending,
            RequestError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            RequestError::UserNotFound(id) => format!("User not found: {}", id),
            RequestError::EventNotFound(id) => format!("Event not found: {}", id),
            RequestError::RequestNotFound(id) => format!("Request not found: {}", id),
            RequestError::OwnEvent(id) => {
                format!("Initiator cannot request participation in own event {}", id)
            }
            RequestError::EventNotPublished(id) => {
                format!("Cannot participate in unpublished event {}", id)
            }
            RequestError::DuplicateRequest {
                event_id,
                requester_id,
            } => format!(
                "User {} already has an active request for event {}",
                requester_id, event_id
            ),
            RequestError::LimitReached(id) => {
                format!("Participant limit reached for event {}", id)
            }
            RequestError::NotEventOwner { event_id, user_id } => format!(
                "User {} is not the initiator of event {}",
                user_id, event_id
            ),
            RequestError::NotRequestOwner { request_id, user_id } => format!(
                "Request {} does not belong to user {}",
                request_id, user_id
            ),
            RequestError::ModerationNotRequired(id) => {
                format!("Confirmation is not required for event {}", id)
            }
            RequestError::NotPending(id) => {
                format!("Only pending requests can be updated, {} is not pending", id)
            }
            RequestError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RequestError {}

impl From<DomainError> for RequestError {
    fn from(err: DomainError) -> Self {
        RequestError::Infrastructure(err.to_string())
    }
}

impl From<RequestError> for DomainError {
    fn from(err: RequestError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
