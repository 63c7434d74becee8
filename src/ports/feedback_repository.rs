//! Feedback repository port.
//!
//! Backs the `interview_feedback` table, which holds at most one row per
//! session.

use crate::domain::feedback::Feedback;
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for generated feedback.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Save feedback for a session.
    ///
    /// # Errors
    ///
    /// - `FeedbackAlreadyExists` if the session already has feedback
    /// - `DatabaseError` on persistence failure
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError>;

    /// Feedback for a session, `None` when none has been generated yet.
    async fn find_by_session(&self, session_id: &SessionId)
        -> Result<Option<Feedback>, DomainError>;
}
