//! Exchange entity - one question/answer turn within a session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{word_count, ExchangeId, SessionId, Timestamp};

/// A single persisted interview turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    id: ExchangeId,
    session_id: SessionId,
    question: String,
    response: String,
    /// 0-based position within the session.
    sequence_number: u32,
    created_at: Timestamp,
}

impl Exchange {
    pub fn new(
        session_id: SessionId,
        question: impl Into<String>,
        response: impl Into<String>,
        sequence_number: u32,
    ) -> Self {
        Self {
            id: ExchangeId::new(),
            session_id,
            question: question.into(),
            response: response.into(),
            sequence_number,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute an exchange from persistence.
    pub fn reconstitute(
        id: ExchangeId,
        session_id: SessionId,
        question: String,
        response: String,
        sequence_number: u32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            question,
            response,
            sequence_number,
            created_at,
        }
    }

    pub fn id(&self) -> &ExchangeId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.response)
    }
}
