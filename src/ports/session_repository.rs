//! Session repository port.
//!
//! Backs the `interview_sessions` table.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::InterviewSession;
use async_trait::async_trait;

/// Repository port for interview session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &InterviewSession) -> Result<(), DomainError>;

    /// Update an existing session (status and completion time).
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &InterviewSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<InterviewSession>, DomainError>;
}
