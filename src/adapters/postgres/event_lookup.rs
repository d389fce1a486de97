//! PostgreSQL implementation of EventLookup.
//!
//! Reads event summaries from the catalog tables owned by the event service.

use crate::domain::event::{EventState, EventSummary};
use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserId};
use crate::ports::EventLookup;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the EventLookup port.
pub struct PostgresEventLookup {
    pool: PgPool,
}

impl PostgresEventLookup {
    /// Creates a new PostgresEventLookup with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an event summary.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    initiator_id: Uuid,
    state: String,
    participant_limit: i32,
    request_moderation: bool,
}

impl TryFrom<EventRow> for EventSummary {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(EventSummary {
            id: EventId::from_uuid(row.id),
            initiator_id: UserId::from_uuid(row.initiator_id),
            state: parse_state(&row.state)?,
            participant_limit: u32::try_from(row.participant_limit).map_err(|_| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid participant_limit: {}", row.participant_limit),
                )
            })?,
            request_moderation: row.request_moderation,
        })
    }
}

fn parse_state(s: &str) -> Result<EventState, DomainError> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(EventState::Pending),
        "published" => Ok(EventState::Published),
        "canceled" => Ok(EventState::Canceled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid state value: {}", s),
        )),
    }
}

#[async_trait]
impl EventLookup for PostgresEventLookup {
    async fn get_event(&self, event_id: &EventId) -> Result<Option<EventSummary>, DomainError> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
            SELECT id, initiator_id, state, participant_limit, request_moderation
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find event: {}", e),
            )
        })?;

        row.map(EventSummary::try_from).transpose()
    }
}
