//! PostgreSQL implementation of FeedbackRepository.
//!
//! Strengths and improvement areas are stored as `TEXT[]` so their order
//! survives the round trip.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::feedback::{Feedback, FeedbackReport};
use crate::domain::foundation::{
    DomainError, ErrorCode, FeedbackId, Score, SessionId, Timestamp,
};
use crate::ports::FeedbackRepository;

/// PostgreSQL implementation of FeedbackRepository.
#[derive(Clone)]
pub struct PostgresFeedbackRepository {
    pool: PgPool,
}

impl PostgresFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PostgresFeedbackRepository {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError> {
        let report = feedback.report();
        sqlx::query(
            r#"
            INSERT INTO interview_feedback (
                id, session_id, overall_score, communication_score, technical_score,
                strengths, areas_for_improvement, detailed_feedback, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(feedback.id().as_uuid())
        .bind(feedback.session_id().as_uuid())
        .bind(i16::from(report.overall_score.value()))
        .bind(i16::from(report.communication_score.value()))
        .bind(i16::from(report.technical_score.value()))
        .bind(&report.strengths)
        .bind(&report.areas_for_improvement)
        .bind(&report.detailed_feedback)
        .bind(feedback.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false);
            if duplicate {
                DomainError::new(
                    ErrorCode::FeedbackAlreadyExists,
                    format!("Feedback already exists for session {}", feedback.session_id()),
                )
                .with_detail("session_id", feedback.session_id().to_string())
            } else {
                DomainError::database("Failed to insert feedback", e)
            }
        })?;

        Ok(())
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Feedback>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, session_id, overall_score, communication_score, technical_score,
                   strengths, areas_for_improvement, detailed_feedback, created_at
            FROM interview_feedback
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch feedback", e))?;

        row.map(row_to_feedback).transpose()
    }
}

fn score_column(row: &PgRow, name: &str) -> Result<Score, DomainError> {
    let raw: i16 = column(row, name)?;
    u8::try_from(raw)
        .ok()
        .and_then(|v| Score::try_new(v).ok())
        .ok_or_else(|| {
            DomainError::database("Score out of range in feedback row", format!("{}={}", name, raw))
        })
}

fn row_to_feedback(row: PgRow) -> Result<Feedback, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let session_id: uuid::Uuid = column(&row, "session_id")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;

    let report = FeedbackReport {
        overall_score: score_column(&row, "overall_score")?,
        communication_score: score_column(&row, "communication_score")?,
        technical_score: score_column(&row, "technical_score")?,
        strengths: column(&row, "strengths")?,
        areas_for_improvement: column(&row, "areas_for_improvement")?,
        detailed_feedback: column(&row, "detailed_feedback")?,
    };

    Ok(Feedback::reconstitute(
        FeedbackId::from_uuid(id),
        SessionId::from_uuid(session_id),
        report,
        Timestamp::from_datetime(created_at),
    ))
}
