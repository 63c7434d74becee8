//! Interview error taxonomy surfaced by the application layer.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::SpeechError;

/// Errors returned by interview handlers and the interview flow.
///
/// Store failures of any cause (network, auth, constraint) collapse into
/// `Store`. None of these are fatal to the process; each is scoped to the
/// current session or turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterviewError {
    /// Persistence call failed.
    #[error("Store error: {0}")]
    Store(String),

    /// Voice capability missing or the platform failed.
    #[error(transparent)]
    Speech(#[from] SpeechError),

    /// Session, role or feedback does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Feedback was already generated for this session.
    #[error("Feedback already exists for session {0}")]
    FeedbackExists(SessionId),

    /// Operation not allowed in the current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Input rejected.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },
}

impl InterviewError {
    pub fn store(message: impl Into<String>) -> Self {
        InterviewError::Store(message.into())
    }

    pub fn session_not_found(id: SessionId) -> Self {
        InterviewError::NotFound {
            entity: "Session",
            id: id.to_string(),
        }
    }

    pub fn feedback_not_found(session_id: SessionId) -> Self {
        InterviewError::NotFound {
            entity: "Feedback for session",
            id: session_id.to_string(),
        }
    }

    pub fn role_not_found(role: impl Into<String>) -> Self {
        InterviewError::NotFound {
            entity: "Role",
            id: role.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        InterviewError::InvalidState(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        InterviewError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, InterviewError::NotFound { .. })
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            InterviewError::Store(_) => ErrorCode::DatabaseError,
            InterviewError::Speech(_) => ErrorCode::SpeechUnavailable,
            InterviewError::NotFound { entity: "Role", .. } => ErrorCode::RoleNotFound,
            InterviewError::NotFound { entity: "Session", .. } => ErrorCode::SessionNotFound,
            InterviewError::NotFound { .. } => ErrorCode::FeedbackNotFound,
            InterviewError::FeedbackExists(_) => ErrorCode::FeedbackAlreadyExists,
            InterviewError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            InterviewError::Validation { .. } => ErrorCode::ValidationFailed,
        }
    }
}

impl From<DomainError> for InterviewError {
    fn from(err: DomainError) -> Self {
        let detail = |key: &str| err.details.get(key).cloned().unwrap_or_default();
        match err.code {
            ErrorCode::SessionNotFound => InterviewError::NotFound {
                entity: "Session",
                id: detail("session_id"),
            },
            ErrorCode::FeedbackNotFound => InterviewError::NotFound {
                entity: "Feedback for session",
                id: detail("session_id"),
            },
            ErrorCode::RoleNotFound => InterviewError::role_not_found(detail("role")),
            ErrorCode::FeedbackAlreadyExists => match detail("session_id").parse() {
                Ok(id) => InterviewError::FeedbackExists(id),
                Err(_) => InterviewError::InvalidState(err.message),
            },
            ErrorCode::InvalidStateTransition => InterviewError::InvalidState(err.message),
            ErrorCode::ValidationFailed => InterviewError::Validation {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::SpeechUnavailable => {
                InterviewError::Speech(SpeechError::Platform(err.message))
            }
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                InterviewError::Store(err.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_collapse_to_store() {
        let err: InterviewError =
            DomainError::database("Failed to insert session", "timeout").into();
        assert_eq!(
            err,
            InterviewError::Store("Failed to insert session: timeout".to_string())
        );
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn role_not_found_keeps_role_key() {
        let domain = DomainError::new(ErrorCode::RoleNotFound, "Unknown role: pilot")
            .with_detail("role", "pilot");
        let err: InterviewError = domain.into();
        assert_eq!(err, InterviewError::role_not_found("pilot"));
        assert_eq!(err.code(), ErrorCode::RoleNotFound);
        assert_eq!(err.to_string(), "Role not found: pilot");
    }

    #[test]
    fn feedback_exists_parses_session_detail() {
        let id = SessionId::new();
        let domain = DomainError::new(ErrorCode::FeedbackAlreadyExists, "dup")
            .with_detail("session_id", id.to_string());
        assert_eq!(InterviewError::from(domain), InterviewError::FeedbackExists(id));
    }

    #[test]
    fn speech_error_is_transparent() {
        let err: InterviewError = SpeechError::Unsupported.into();
        assert_eq!(err.to_string(), "Voice is not supported on this platform");
        assert_eq!(err.code(), ErrorCode::SpeechUnavailable);
    }

    #[test]
    fn not_found_codes_by_entity() {
        let id = SessionId::new();
        assert_eq!(
            InterviewError::session_not_found(id).code(),
            ErrorCode::SessionNotFound
        );
        assert_eq!(
            InterviewError::feedback_not_found(id).code(),
            ErrorCode::FeedbackNotFound
        );
        assert!(InterviewError::feedback_not_found(id).is_not_found());
    }
}
