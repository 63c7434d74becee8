//! Interview session aggregate.
//!
//! A session is one interview attempt for one role. It is created
//! `in_progress`, transitions once to `completed`, and is never deleted.
//! Exchanges and feedback reference the session by id; it does not own them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RoleId, SessionId, SessionStatus, Timestamp};

/// Interview session aggregate.
///
/// # Invariants
///
/// - `completed_at` is set if and only if status is `Completed`
/// - status only moves `InProgress -> Completed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSession {
    id: SessionId,
    role: RoleId,
    status: SessionStatus,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
    created_at: Timestamp,
}

impl InterviewSession {
    /// Starts a new session for `role`.
    pub fn new(role: RoleId) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            role,
            status: SessionStatus::InProgress,
            started_at: now,
            completed_at: None,
            created_at: now,
        }
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        role: RoleId,
        status: SessionStatus,
        started_at: Timestamp,
        completed_at: Option<Timestamp>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            role,
            status,
            started_at,
            completed_at,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn role(&self) -> &RoleId {
        &self.role
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the session completed and stamps the completion time.
    ///
    /// Returns `false` without changing anything if the session was already
    /// completed, so repeating the call is harmless.
    pub fn complete(&mut self) -> bool {
        if !self.status.can_transition_to(&SessionStatus::Completed) {
            return false;
        }
        self.status = SessionStatus::Completed;
        self.completed_at = Some(Timestamp::now());
        true
    }
}
