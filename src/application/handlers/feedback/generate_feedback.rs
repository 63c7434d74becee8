//! GenerateFeedbackHandler - Command handler that scores a session's answers
//! and stores the result.

use std::sync::Arc;

use tracing::info;

use crate::domain::feedback::{Feedback, FeedbackAnalyzer};
use crate::domain::foundation::{RoleId, SessionId};
use crate::domain::role::RoleCatalog;
use crate::domain::session::InterviewError;
use crate::ports::{ExchangeRepository, FeedbackRepository};

/// Command to analyze a session and persist its feedback.
#[derive(Debug, Clone)]
pub struct GenerateFeedbackCommand {
    pub session_id: SessionId,
    pub role: RoleId,
}

/// Handler for generating feedback.
///
/// Session status is not checked; feedback can be produced for a session
/// that was never completed. A session gets at most one feedback record.
pub struct GenerateFeedbackHandler {
    exchanges: Arc<dyn ExchangeRepository>,
    feedback: Arc<dyn FeedbackRepository>,
    catalog: Arc<RoleCatalog>,
}

impl GenerateFeedbackHandler {
    pub fn new(
        exchanges: Arc<dyn ExchangeRepository>,
        feedback: Arc<dyn FeedbackRepository>,
        catalog: Arc<RoleCatalog>,
    ) -> Self {
        Self {
            exchanges,
            feedback,
            catalog,
        }
    }

    pub async fn handle(&self, cmd: GenerateFeedbackCommand) -> Result<Feedback, InterviewError> {
        let role = self.catalog.get(&cmd.role)?;

        if self.feedback.find_by_session(&cmd.session_id).await?.is_some() {
            return Err(InterviewError::FeedbackExists(cmd.session_id));
        }

        let exchanges = self.exchanges.find_by_session(&cmd.session_id).await?;
        let report = FeedbackAnalyzer::analyze(role, &exchanges);
        let feedback = Feedback::new(cmd.session_id, report);

        self.feedback.save(&feedback).await?;

        info!(
            session_id = %cmd.session_id,
            role = %cmd.role,
            answered = exchanges.len(),
            overall = feedback.overall_score().value(),
            "interview feedback stored"
        );
        Ok(feedback)
    }
}
