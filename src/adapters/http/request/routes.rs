//! Axum router configuration for participation request endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    cancel_request, create_request, list_event_requests, list_own_requests,
    update_request_statuses, RequestAppState,
};

/// Create the participation request API router.
///
/// # Routes
///
/// ## Requester Endpoints
/// - `GET  /users/:user_id/requests` - List own requests
/// - `POST /users/:user_id/requests?eventId=...` - Create a request
/// - `PATCH /users/:user_id/requests/:request_id/cancel` - Cancel own request
///
/// ## Owner Endpoints
/// - `GET  /users/:user_id/events/:event_id/requests` - Owner's view
/// - `PATCH /users/:user_id/events/:event_id/requests` - Bulk confirm/reject
pub fn request_routes() -> Router<RequestAppState> {
    Router::new()
        .route(
            "/users/:user_id/requests",
            get(list_own_requests).post(create_request),
        )
        .route(
            "/users/:user_id/requests/:request_id/cancel",
            patch(cancel_request),
        )
        .route(
            "/users/:user_id/events/:event_id/requests",
            get(list_event_requests).patch(update_request_statuses),
        )
}
