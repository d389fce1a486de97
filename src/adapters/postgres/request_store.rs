//! PostgreSQL implementation of RequestStore.
//!
//! Persistent storage for participation requests using PostgreSQL.

use crate::domain::foundation::{DomainError, ErrorCode, EventId, RequestId, Timestamp, UserId};
use crate::domain::request::{ParticipationRequest, RequestStatus};
use crate::ports::RequestStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the RequestStore port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresRequestStore {
    pool: PgPool,
}

impl PostgresRequestStore {
    /// Creates a new PostgresRequestStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a participation request.
#[derive(Debug, sqlx::FromRow)]
struct RequestRow {
    id: Uuid,
    event_id: Uuid,
    requester_id: Uuid,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<RequestRow> for ParticipationRequest {
    type Error = DomainError;

    fn try_from(row: RequestRow) -> Result<Self, Self::Error> {
        Ok(ParticipationRequest {
            id: RequestId::from_uuid(row.id),
            event_id: EventId::from_uuid(row.event_id),
            requester_id: UserId::from_uuid(row.requester_id),
            status: parse_status(&row.status)?,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_status(s: &str) -> Result<RequestStatus, DomainError> {
    match s.to_lowercase().as_str() {
        "pending" => Ok(RequestStatus::Pending),
        "confirmed" => Ok(RequestStatus::Confirmed),
        "rejected" => Ok(RequestStatus::Rejected),
        "canceled" => Ok(RequestStatus::Canceled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

fn status_to_string(status: &RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "pending",
        RequestStatus::Confirmed => "confirmed",
        RequestStatus::Rejected => "rejected",
        RequestStatus::Canceled => "canceled",
    }
}

const SELECT_COLUMNS: &str = "id, event_id, requester_id, status, created_at";

#[async_trait]
impl RequestStore for PostgresRequestStore {
    async fn exists_active(
        &self,
        event_id: &EventId,
        requester_id: &UserId,
    ) -> Result<bool, DomainError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM participation_requests
                WHERE event_id = $1 AND requester_id = $2 AND status != 'canceled'
            )
            "#,
        )
        .bind(event_id.as_uuid())
        .bind(requester_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check for active request: {}", e),
            )
        })?;

        Ok(exists)
    }

    async fn count_by_status(
        &self,
        event_id: &EventId,
        status: RequestStatus,
    ) -> Result<u32, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM participation_requests WHERE event_id = $1 AND status = $2",
        )
        .bind(event_id.as_uuid())
        .bind(status_to_string(&status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to count requests: {}", e),
            )
        })?;

        Ok(count as u32)
    }

    async fn save(&self, request: &ParticipationRequest) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO participation_requests (id, event_id, requester_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET status = EXCLUDED.status
            "#,
        )
        .bind(request.id.as_uuid())
        .bind(request.event_id.as_uuid())
        .bind(request.requester_id.as_uuid())
        .bind(status_to_string(&request.status))
        .bind(request.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("participation_requests_active_key") {
                    return DomainError::new(
                        ErrorCode::RequestExists,
                        "User already has an active request for this event",
                    );
                }
            }
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save request: {}", e),
            )
        })?;

        Ok(())
    }

    async fn save_all(&self, requests: &[ParticipationRequest]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        for request in requests {
            sqlx::query(
                r#"
                INSERT INTO participation_requests (id, event_id, requester_id, status, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO UPDATE SET status = EXCLUDED.status
                "#,
            )
            .bind(request.id.as_uuid())
            .bind(request.event_id.as_uuid())
            .bind(request.requester_id.as_uuid())
            .bind(status_to_string(&request.status))
            .bind(request.created_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to save request batch: {}", e),
                )
            })?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit request batch: {}", e),
            )
        })
    }

    async fn find_by_id(
        &self,
        id: &RequestId,
    ) -> Result<Option<ParticipationRequest>, DomainError> {
        let row: Option<RequestRow> = sqlx::query_as(&format!(
            "SELECT {} FROM participation_requests WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find request: {}", e),
            )
        })?;

        row.map(ParticipationRequest::try_from).transpose()
    }

    async fn find_by_ids(
        &self,
        ids: &[RequestId],
    ) -> Result<Vec<ParticipationRequest>, DomainError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let rows: Vec<RequestRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM participation_requests
            WHERE id = ANY($1)
            ORDER BY array_position($1, id)
            "#,
            SELECT_COLUMNS
        ))
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find requests: {}", e),
            )
        })?;

        rows.into_iter()
            .map(ParticipationRequest::try_from)
            .collect()
    }

    async fn find_by_requester(
        &self,
        requester_id: &UserId,
    ) -> Result<Vec<ParticipationRequest>, DomainError> {
        let rows: Vec<RequestRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM participation_requests
            WHERE requester_id = $1
            ORDER BY created_at ASC
            "#,
            SELECT_COLUMNS
        ))
        .bind(requester_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find requests: {}", e),
            )
        })?;

        rows.into_iter()
            .map(ParticipationRequest::try_from)
            .collect()
    }

    async fn find_by_event(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<ParticipationRequest>, DomainError> {
        let rows: Vec<RequestRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM participation_requests
            WHERE event_id = $1
            ORDER BY created_at ASC
            "#,
            SELECT_COLUMNS
        ))
        .bind(event_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find requests: {}", e),
            )
        })?;

        rows.into_iter()
            .map(ParticipationRequest::try_from)
            .collect()
    }

    async fn find_by_event_and_status(
        &self,
        event_id: &EventId,
        status: RequestStatus,
    ) -> Result<Vec<ParticipationRequest>, DomainError> {
        let rows: Vec<RequestRow> = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM participation_requests
            WHERE event_id = $1 AND status = $2
            ORDER BY created_at ASC
            "#,
            SELECT_COLUMNS
        ))
        .bind(event_id.as_uuid())
        .bind(status_to_string(&status))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find requests: {}", e),
            )
        })?;

        rows.into_iter()
            .map(ParticipationRequest::try_from)
            .collect()
    }
}
