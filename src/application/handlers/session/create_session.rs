//! CreateSessionHandler - Command handler for starting an interview session.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::RoleId;
use crate::domain::role::RoleCatalog;
use crate::domain::session::{InterviewError, InterviewSession};
use crate::ports::SessionRepository;

/// Command to create a new interview session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub role: RoleId,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
    catalog: Arc<RoleCatalog>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, catalog: Arc<RoleCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<InterviewSession, InterviewError> {
        // Unknown roles never reach the store
        self.catalog.get(&cmd.role)?;

        let session = InterviewSession::new(cmd.role);
        self.repository.save(&session).await?;

        info!(
            session_id = %session.id(),
            role = %session.role(),
            "interview session created"
        );
        Ok(session)
    }
}
