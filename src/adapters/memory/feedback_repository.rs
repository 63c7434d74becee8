//! In-memory feedback repository.

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feedback::Feedback;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::FeedbackRepository;

/// Feedback storage keyed by session. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackRepository {
    feedback: Arc<RwLock<HashMap<SessionId, Feedback>>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn save(&self, feedback: &Feedback) -> Result<(), DomainError> {
        match self.feedback.write().await.entry(*feedback.session_id()) {
            Entry::Occupied(_) => Err(DomainError::new(
                ErrorCode::FeedbackAlreadyExists,
                format!("Feedback already exists for session {}", feedback.session_id()),
            )
            .with_detail("session_id", feedback.session_id().to_string())),
            Entry::Vacant(slot) => {
                slot.insert(feedback.clone());
                Ok(())
            }
        }
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Feedback>, DomainError> {
        Ok(self.feedback.read().await.get(session_id).cloned())
    }
}
