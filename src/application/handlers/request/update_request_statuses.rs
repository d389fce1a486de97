//! UpdateRequestStatusesHandler - Command handler for bulk moderation.

use std::sync::Arc;

use crate::application::locks::EventLockMap;
use crate::domain::foundation::{EventId, RequestId, UserId};
use crate::domain::request::{
    EventCapacityPolicy, ParticipationRequest, RequestError, RequestStatus, StatusAction,
};
use crate::ports::{EventLookup, RequestStore};

/// Command to confirm or reject a batch of pending requests.
#[derive(Debug, Clone)]
pub struct UpdateRequestStatusesCommand {
    pub owner_id: UserId,
    pub event_id: EventId,
    pub request_ids: Vec<RequestId>,
    pub action: StatusAction,
}

/// Outcome of a bulk update, split by resulting status.
///
/// Cascade-rejected requests that were not in the batch appear in
/// `rejected` alongside the batch's own losers.
#[derive(Debug, Clone, Default)]
pub struct StatusUpdateResult {
    pub confirmed: Vec<ParticipationRequest>,
    pub rejected: Vec<ParticipationRequest>,
}

/// Handler for the event owner's bulk confirm/reject operation.
///
/// The whole operation runs under the event's lock: the pending pre-check,
/// the confirmed-count read, every per-request decision, and the cascade
/// rejection of leftover pending requests once the limit is exhausted.
pub struct UpdateRequestStatusesHandler {
    store: Arc<dyn RequestStore>,
    events: Arc<dyn EventLookup>,
    locks: Arc<EventLockMap>,
}

impl UpdateRequestStatusesHandler {
    pub fn new(
        store: Arc<dyn RequestStore>,
        events: Arc<dyn EventLookup>,
        locks: Arc<EventLockMap>,
    ) -> Self {
        Self {
            store,
            events,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateRequestStatusesCommand,
    ) -> Result<StatusUpdateResult, RequestError> {
        let event = self
            .events
            .get_event(&cmd.event_id)
            .await?
            .ok_or(RequestError::event_not_found(cmd.event_id))?;

        if !event.is_owned_by(&cmd.owner_id) {
            return Err(RequestError::not_event_owner(cmd.event_id, cmd.owner_id));
        }
        if !event.requires_moderation() {
            return Err(RequestError::moderation_not_required(cmd.event_id));
        }

        let _guard = self.locks.acquire(cmd.event_id).await;

        // Missing ids are skipped, not errors.
        let mut batch = self.store.find_by_ids(&cmd.request_ids).await?;

        // All-or-nothing: a single non-pending request fails the batch
        // before anything is mutated.
        for request in &batch {
            if !request.status.is_pending() {
                return Err(RequestError::not_pending(request.id));
            }
        }

        let mut confirmed_count = self
            .store
            .count_by_status(&cmd.event_id, RequestStatus::Confirmed)
            .await?;

        let mut result = StatusUpdateResult::default();
        for request in &mut batch {
            let decision = EventCapacityPolicy::decide_bulk_status(
                cmd.action,
                event.participant_limit,
                confirmed_count,
            );
            request.status = decision;
            match decision {
                RequestStatus::Confirmed => {
                    confirmed_count += 1;
                    result.confirmed.push(request.clone());
                }
                _ => result.rejected.push(request.clone()),
            }
        }
        self.store.save_all(&batch).await?;

        // Confirming up to the limit auto-rejects every other pending
        // request for the event.
        if cmd.action == StatusAction::Confirmed && event.is_full(confirmed_count) {
            let mut leftover = self
                .store
                .find_by_event_and_status(&cmd.event_id, RequestStatus::Pending)
                .await?;
            for request in &mut leftover {
                request.status = RequestStatus::Rejected;
            }
            self.store.save_all(&leftover).await?;
            result.rejected.extend(leftover);
        }

        tracing::info!(
            event_id = %cmd.event_id,
            action = ?cmd.action,
            confirmed = result.confirmed.len(),
            rejected = result.rejected.len(),
            "bulk request status update applied"
        );

        Ok(result)
    }
}
