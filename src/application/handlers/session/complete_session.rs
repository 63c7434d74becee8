//! CompleteSessionHandler - Command handler for closing an interview session.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::SessionId;
use crate::domain::session::{InterviewError, InterviewSession};
use crate::ports::SessionRepository;

/// Command to mark a session completed.
#[derive(Debug, Clone)]
pub struct CompleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for completing sessions.
///
/// Completing an already completed session returns it unchanged and does
/// not write to the store. An unknown session is a store failure, since the
/// caller only ever holds ids the store handed out.
pub struct CompleteSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CompleteSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CompleteSessionCommand,
    ) -> Result<InterviewSession, InterviewError> {
        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| {
                InterviewError::store(format!(
                    "Cannot complete session {}: no such session",
                    cmd.session_id
                ))
            })?;

        if !session.complete() {
            debug!(session_id = %cmd.session_id, "session already completed");
            return Ok(session);
        }

        self.repository.update(&session).await?;

        info!(
            session_id = %session.id(),
            role = %session.role(),
            "interview session completed"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, RoleId, SessionStatus};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSessionRepository {
        session: Mutex<Option<InterviewSession>>,
        updates: Mutex<u32>,
        fail_update: bool,
    }

    impl MockSessionRepository {
        fn with(session: InterviewSession) -> Self {
            Self {
                session: Mutex::new(Some(session)),
                updates: Mutex::new(0),
                fail_update: false,
            }
        }

        fn empty() -> Self {
            Self {
                session: Mutex::new(None),
                updates: Mutex::new(0),
                fail_update: false,
            }
        }

        fn failing(session: InterviewSession) -> Self {
            Self {
                fail_update: true,
                ..Self::with(session)
            }
        }

        fn updates(&self) -> u32 {
            *self.updates.lock().unwrap()
        }
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn save(&self, session: &InterviewSession) -> Result<(), DomainError> {
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        async fn update(&self, session: &InterviewSession) -> Result<(), DomainError> {
            if self.fail_update {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated update failure",
                ));
            }
            *self.updates.lock().unwrap() += 1;
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &SessionId,
        ) -> Result<Option<InterviewSession>, DomainError> {
            Ok(self
                .session
                .lock()
                .unwrap()
                .clone()
                .filter(|s| s.id() == id))
        }
    }

    fn in_progress() -> InterviewSession {
        InterviewSession::new(RoleId::new("engineer").unwrap())
    }

    #[tokio::test]
    async fn completes_and_stamps_time() {
        let session = in_progress();
        let id = *session.id();
        let repo = Arc::new(MockSessionRepository::with(session));
        let handler = CompleteSessionHandler::new(repo.clone());

        let completed = handler
            .handle(CompleteSessionCommand { session_id: id })
            .await
            .unwrap();

        assert_eq!(completed.status(), SessionStatus::Completed);
        let completed_at = completed.completed_at().unwrap();
        assert!(!completed.started_at().is_after(completed_at));
        assert_eq!(repo.updates(), 1);
    }

    #[tokio::test]
    async fn second_completion_is_a_no_op() {
        let session = in_progress();
        let id = *session.id();
        let repo = Arc::new(MockSessionRepository::with(session));
        let handler = CompleteSessionHandler::new(repo.clone());

        let first = handler
            .handle(CompleteSessionCommand { session_id: id })
            .await
            .unwrap();
        let second = handler
            .handle(CompleteSessionCommand { session_id: id })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.updates(), 1);
    }

    #[tokio::test]
    async fn missing_session_is_store_error() {
        let handler = CompleteSessionHandler::new(Arc::new(MockSessionRepository::empty()));
        let id = SessionId::new();

        let err = handler
            .handle(CompleteSessionCommand { session_id: id })
            .await
            .unwrap_err();

        assert!(matches!(err, InterviewError::Store(ref msg) if msg.contains(&id.to_string())));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn update_failure_surfaces_as_store_error() {
        let session = in_progress();
        let id = *session.id();
        let handler = CompleteSessionHandler::new(Arc::new(MockSessionRepository::failing(session)));

        let err = handler
            .handle(CompleteSessionCommand { session_id: id })
            .await
            .unwrap_err();

        assert!(matches!(err, InterviewError::Store(_)));
    }
}
