//! PostgreSQL implementation of ExchangeRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::exchange::Exchange;
use crate::domain::foundation::{DomainError, ExchangeId, SessionId, Timestamp};
use crate::ports::ExchangeRepository;

/// PostgreSQL implementation of ExchangeRepository.
#[derive(Clone)]
pub struct PostgresExchangeRepository {
    pool: PgPool,
}

impl PostgresExchangeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExchangeRepository for PostgresExchangeRepository {
    async fn save(&self, exchange: &Exchange) -> Result<(), DomainError> {
        let sequence = i32::try_from(exchange.sequence_number())
            .map_err(|e| DomainError::database("Sequence number out of range", e))?;

        sqlx::query(
            r#"
            INSERT INTO interview_exchanges (
                id, session_id, question, response, sequence_number, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(exchange.id().as_uuid())
        .bind(exchange.session_id().as_uuid())
        .bind(exchange.question())
        .bind(exchange.response())
        .bind(sequence)
        .bind(exchange.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert exchange", e))?;

        Ok(())
    }

    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Exchange>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, question, response, sequence_number, created_at
            FROM interview_exchanges
            WHERE session_id = $1
            ORDER BY sequence_number ASC, created_at ASC
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch exchanges", e))?;

        rows.into_iter().map(row_to_exchange).collect()
    }
}

fn row_to_exchange(row: PgRow) -> Result<Exchange, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let session_id: uuid::Uuid = column(&row, "session_id")?;
    let question: String = column(&row, "question")?;
    let response: String = column(&row, "response")?;
    let sequence: i32 = column(&row, "sequence_number")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;

    let sequence = u32::try_from(sequence)
        .map_err(|e| DomainError::database("Negative sequence number in exchange row", e))?;

    Ok(Exchange::reconstitute(
        ExchangeId::from_uuid(id),
        SessionId::from_uuid(session_id),
        question,
        response,
        sequence,
        Timestamp::from_datetime(created_at),
    ))
}
