//! Event capacity policy.
//!
//! Pure decision logic for admitting participants. Capacity is a
//! monotonically consumed resource: every decision is made against the
//! confirmed count the caller read, and batch processing order determines
//! which requests in an oversubscribed batch win. Callers must read the
//! count transactionally with the decision that consumes it.

use super::RequestStatus;
use serde::{Deserialize, Serialize};

/// Action requested by the event owner for a batch of pending requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusAction {
    Confirmed,
    Rejected,
}

/// Stateless admission decisions for participation requests.
pub struct EventCapacityPolicy;

impl EventCapacityPolicy {
    /// Decides the initial status of a newly created request.
    ///
    /// Unlimited events (`limit == 0`) and events without moderation
    /// auto-confirm unconditionally. Otherwise a full event yields
    /// `Rejected`, which the caller surfaces as a conflict instead of
    /// persisting, and a non-full event yields `Pending`.
    pub fn decide_initial_status(
        limit: u32,
        moderation_enabled: bool,
        confirmed_count: u32,
    ) -> RequestStatus {
        if limit == 0 || !moderation_enabled {
            return RequestStatus::Confirmed;
        }
        if confirmed_count >= limit {
            return RequestStatus::Rejected;
        }
        RequestStatus::Pending
    }

    /// Decides the outcome of one request inside a bulk status update.
    ///
    /// Evaluated per request in the batch's input order; the caller
    /// increments `confirmed_so_far` after every `Confirmed` decision, so a
    /// confirmation that exhausts the limit forces the rest of the batch to
    /// `Rejected`.
    pub fn decide_bulk_status(
        action: StatusAction,
        limit: u32,
        confirmed_so_far: u32,
    ) -> RequestStatus {
        match action {
            StatusAction::Rejected => RequestStatus::Rejected,
            StatusAction::Confirmed => {
                if limit != 0 && confirmed_so_far >= limit {
                    RequestStatus::Rejected
                } else {
                    RequestStatus::Confirmed
                }
            }
        }
    }
}
