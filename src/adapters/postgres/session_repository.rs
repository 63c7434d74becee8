//! PostgreSQL implementation of SessionRepository.
//!
//! Persists interview sessions to `interview_sessions`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{
    DomainError, ErrorCode, RoleId, SessionId, SessionStatus, Timestamp,
};
use crate::domain::session::InterviewSession;
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &InterviewSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO interview_sessions (
                id, role, status, started_at, completed_at, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.role().as_str())
        .bind(session.status().as_str())
        .bind(session.started_at().as_datetime())
        .bind(session.completed_at().map(|t| *t.as_datetime()))
        .bind(session.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        Ok(())
    }

    async fn update(&self, session: &InterviewSession) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE interview_sessions SET
                status = $2,
                completed_at = $3
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.status().as_str())
        .bind(session.completed_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update session", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )
            .with_detail("session_id", session.id().to_string()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<InterviewSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, role, status, started_at, completed_at, created_at
            FROM interview_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.map(row_to_session).transpose()
    }
}

fn row_to_session(row: PgRow) -> Result<InterviewSession, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let role: String = column(&row, "role")?;
    let status: String = column(&row, "status")?;
    let started_at: DateTime<Utc> = column(&row, "started_at")?;
    let completed_at: Option<DateTime<Utc>> = column(&row, "completed_at")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;

    let role = RoleId::new(role)
        .map_err(|e| DomainError::database("Invalid role in session row", e))?;
    let status: SessionStatus = status
        .parse()
        .map_err(|e| DomainError::database("Invalid status in session row", e))?;

    Ok(InterviewSession::reconstitute(
        SessionId::from_uuid(id),
        role,
        status,
        Timestamp::from_datetime(started_at),
        completed_at.map(Timestamp::from_datetime),
        Timestamp::from_datetime(created_at),
    ))
}
