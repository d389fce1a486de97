//! HTTP handlers for participation request endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::request::{
    CancelRequestCommand, CancelRequestHandler, CreateRequestCommand, CreateRequestHandler,
    ListEventRequestsHandler, ListEventRequestsQuery, ListOwnRequestsHandler,
    ListOwnRequestsQuery, UpdateRequestStatusesCommand, UpdateRequestStatusesHandler,
};
use crate::application::locks::EventLockMap;
use crate::domain::foundation::{EventId, RequestId, UserId};
use crate::domain::request::RequestError;
use crate::ports::{EventLookup, RequestStore, UserLookup};

use super::dto::{
    CreateRequestParams, ErrorResponse, ParticipationRequestResponse, StatusUpdateResponse,
    UpdateRequestStatusesBody,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct RequestAppState {
    pub request_store: Arc<dyn RequestStore>,
    pub event_lookup: Arc<dyn EventLookup>,
    pub user_lookup: Arc<dyn UserLookup>,
    pub event_locks: Arc<EventLockMap>,
}

impl RequestAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_request_handler(&self) -> CreateRequestHandler {
        CreateRequestHandler::new(
            self.request_store.clone(),
            self.event_lookup.clone(),
            self.user_lookup.clone(),
            self.event_locks.clone(),
        )
    }

    pub fn cancel_request_handler(&self) -> CancelRequestHandler {
        CancelRequestHandler::new(self.request_store.clone(), self.event_locks.clone())
    }

    pub fn list_own_requests_handler(&self) -> ListOwnRequestsHandler {
        ListOwnRequestsHandler::new(self.request_store.clone(), self.user_lookup.clone())
    }

    pub fn list_event_requests_handler(&self) -> ListEventRequestsHandler {
        ListEventRequestsHandler::new(self.request_store.clone(), self.event_lookup.clone())
    }

    pub fn update_request_statuses_handler(&self) -> UpdateRequestStatusesHandler {
        UpdateRequestStatusesHandler::new(
            self.request_store.clone(),
            self.event_lookup.clone(),
            self.event_locks.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Requester Endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// GET /users/{user_id}/requests - List the user's own requests
pub async fn list_own_requests(
    State(state): State<RequestAppState>,
    Path(user_id): Path<UserId>,
) -> Result<impl IntoResponse, RequestApiError> {
    let handler = state.list_own_requests_handler();
    let query = ListOwnRequestsQuery {
        requester_id: user_id,
    };

    let requests = handler.handle(query).await?;

    let response: Vec<ParticipationRequestResponse> = requests
        .into_iter()
        .map(ParticipationRequestResponse::from)
        .collect();

    Ok(Json(response))
}

/// POST /users/{user_id}/requests?eventId=... - Create a participation request
pub async fn create_request(
    State(state): State<RequestAppState>,
    Path(user_id): Path<UserId>,
    Query(params): Query<CreateRequestParams>,
) -> Result<impl IntoResponse, RequestApiError> {
    let handler = state.create_request_handler();
    let cmd = CreateRequestCommand {
        requester_id: user_id,
        event_id: params.event_id,
    };

    let request = handler.handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(ParticipationRequestResponse::from(request)),
    ))
}

/// PATCH /users/{user_id}/requests/{request_id}/cancel - Cancel own request
pub async fn cancel_request(
    State(state): State<RequestAppState>,
    Path((user_id, request_id)): Path<(UserId, RequestId)>,
) -> Result<impl IntoResponse, RequestApiError> {
    let handler = state.cancel_request_handler();
    let cmd = CancelRequestCommand {
        requester_id: user_id,
        request_id,
    };

    let request = handler.handle(cmd).await?;

    Ok(Json(ParticipationRequestResponse::from(request)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Owner Endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// GET /users/{user_id}/events/{event_id}/requests - Owner's view of requests
pub async fn list_event_requests(
    State(state): State<RequestAppState>,
    Path((user_id, event_id)): Path<(UserId, EventId)>,
) -> Result<impl IntoResponse, RequestApiError> {
    let handler = state.list_event_requests_handler();
    let query = ListEventRequestsQuery {
        owner_id: user_id,
        event_id,
    };

    let requests = handler.handle(query).await?;

    let response: Vec<ParticipationRequestResponse> = requests
        .into_iter()
        .map(ParticipationRequestResponse::from)
        .collect();

    Ok(Json(response))
}

/// PATCH /users/{user_id}/events/{event_id}/requests - Bulk confirm/reject
pub async fn update_request_statuses(
    State(state): State<RequestAppState>,
    Path((user_id, event_id)): Path<(UserId, EventId)>,
    Json(body): Json<UpdateRequestStatusesBody>,
) -> Result<impl IntoResponse, RequestApiError> {
    let handler = state.update_request_statuses_handler();
    let cmd = UpdateRequestStatusesCommand {
        owner_id: user_id,
        event_id,
        request_ids: body.request_ids,
        action: body.status,
    };

    let result = handler.handle(cmd).await?;

    let response = StatusUpdateResponse {
        confirmed_requests: result
            .confirmed
            .into_iter()
            .map(ParticipationRequestResponse::from)
            .collect(),
        rejected_requests: result
            .rejected
            .into_iter()
            .map(ParticipationRequestResponse::from)
            .collect(),
    };

    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct RequestApiError(RequestError);

impl From<RequestError> for RequestApiError {
    fn from(err: RequestError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RequestApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            RequestError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::CONFLICT,
        };

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}
