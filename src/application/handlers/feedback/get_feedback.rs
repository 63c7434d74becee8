//! GetFeedbackHandler - Query handler for a session's stored feedback.

use std::sync::Arc;

use crate::domain::feedback::Feedback;
use crate::domain::foundation::SessionId;
use crate::domain::session::InterviewError;
use crate::ports::FeedbackRepository;

/// Query for the feedback of one session.
#[derive(Debug, Clone)]
pub struct GetFeedbackQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving feedback.
pub struct GetFeedbackHandler {
    repository: Arc<dyn FeedbackRepository>,
}

impl GetFeedbackHandler {
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }

    /// Returns `NotFound` while no feedback has been generated.
    pub async fn handle(&self, query: GetFeedbackQuery) -> Result<Feedback, InterviewError> {
        self.repository
            .find_by_session(&query.session_id)
            .await?
            .ok_or_else(|| InterviewError::feedback_not_found(query.session_id))
    }
}
