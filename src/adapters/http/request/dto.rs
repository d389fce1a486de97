//! HTTP DTOs for participation request endpoints.
//!
//! These types define the JSON request/response structure for the moderation
//! API. They serve as the boundary between HTTP and the application layer.

use crate::domain::foundation::{EventId, RequestId, UserId};
use crate::domain::request::{ParticipationRequest, RequestStatus, StatusAction};
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for creating a participation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestParams {
    /// The event to request participation in.
    pub event_id: EventId,
}

/// Request body for the owner's bulk status update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatusesBody {
    /// Ids of the pending requests to update; unknown ids are skipped.
    pub request_ids: Vec<RequestId>,
    /// The target status, `CONFIRMED` or `REJECTED`.
    pub status: StatusAction,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A participation request as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRequestResponse {
    /// Request ID.
    pub id: RequestId,
    /// The event the request targets.
    pub event_id: EventId,
    /// The user who made the request.
    pub requester_id: UserId,
    /// Current status (`PENDING`, `CONFIRMED`, `REJECTED`, `CANCELED`).
    pub status: RequestStatus,
    /// When the request was created (ISO 8601).
    pub created_at: String,
}

impl From<ParticipationRequest> for ParticipationRequestResponse {
    fn from(request: ParticipationRequest) -> Self {
        Self {
            id: request.id,
            event_id: request.event_id,
            requester_id: request.requester_id,
            status: request.status,
            created_at: request.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Outcome of a bulk status update, split by resulting status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateResponse {
    pub confirmed_requests: Vec<ParticipationRequestResponse>,
    pub rejected_requests: Vec<ParticipationRequestResponse>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
