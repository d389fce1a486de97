//! Participation request command and query handlers.

mod cancel_request;
mod create_request;
mod list_event_requests;
mod list_own_requests;
mod update_request_statuses;

pub use cancel_request::{CancelRequestCommand, CancelRequestHandler};
pub use create_request::{CreateRequestCommand, CreateRequestHandler};
pub use list_event_requests::{ListEventRequestsHandler, ListEventRequestsQuery};
pub use list_own_requests::{ListOwnRequestsHandler, ListOwnRequestsQuery};
pub use update_request_statuses::{
    StatusUpdateResult, UpdateRequestStatusesCommand, UpdateRequestStatusesHandler,
};
