//! InterviewFlow - drives one interview from the first question to feedback.
//!
//! The flow owns no per-interview data. Callers hold the `InterviewState`
//! returned by [`InterviewFlow::start`] and pass it back on every answer.

use std::sync::Arc;

use tracing::{debug, info};

use super::handlers::{
    CompleteSessionCommand, CompleteSessionHandler, CreateSessionCommand, CreateSessionHandler,
    GenerateFeedbackCommand, GenerateFeedbackHandler, RecordExchangeCommand,
    RecordExchangeHandler,
};
use crate::domain::feedback::Feedback;
use crate::domain::foundation::RoleId;
use crate::domain::role::RoleCatalog;
use crate::domain::sequencer::QuestionSequencer;
use crate::domain::session::{InterviewError, InterviewState};
use crate::ports::{ExchangeRepository, FeedbackRepository, SessionRepository};

/// Said once the last answer is in, while feedback is being prepared.
pub const FAREWELL_MESSAGE: &str =
    "Thank you for completing the interview! I'm now analyzing your responses to provide feedback...";

/// Result of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The interview continues with this question.
    Asked(String),
    /// The turn cap was reached; the session is completed and scored.
    Finished(Feedback),
}

pub struct InterviewFlow {
    catalog: Arc<RoleCatalog>,
    create_session: CreateSessionHandler,
    record_exchange: RecordExchangeHandler,
    complete_session: CompleteSessionHandler,
    generate_feedback: GenerateFeedbackHandler,
    max_turns: usize,
}

impl InterviewFlow {
    pub fn new(
        catalog: Arc<RoleCatalog>,
        sessions: Arc<dyn SessionRepository>,
        exchanges: Arc<dyn ExchangeRepository>,
        feedback: Arc<dyn FeedbackRepository>,
        max_turns: usize,
    ) -> Self {
        Self {
            create_session: CreateSessionHandler::new(sessions.clone(), catalog.clone()),
            record_exchange: RecordExchangeHandler::new(exchanges.clone()),
            complete_session: CompleteSessionHandler::new(sessions),
            generate_feedback: GenerateFeedbackHandler::new(exchanges, feedback, catalog.clone()),
            catalog,
            max_turns: max_turns.max(1),
        }
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Creates a session for `role` and poses its opening question.
    pub async fn start(&self, role: RoleId) -> Result<InterviewState, InterviewError> {
        let session = self
            .create_session
            .handle(CreateSessionCommand { role: role.clone() })
            .await?;

        let first = QuestionSequencer::next_question(self.catalog.get(&role)?, "", "", 0);
        debug!(session_id = %session.id(), turn = 0, question = first, "question asked");

        Ok(InterviewState::new(*session.id(), role, self.max_turns, first))
    }

    /// Records `answer` to the current question and advances the interview.
    ///
    /// The answer is trimmed; a blank answer is rejected and nothing is
    /// stored. When this answer reaches the turn cap the session is
    /// completed and feedback generated. If that last step fails, the state
    /// is already finished and [`InterviewFlow::finish`] can be retried.
    pub async fn submit_answer(
        &self,
        state: &mut InterviewState,
        answer: &str,
    ) -> Result<TurnOutcome, InterviewError> {
        let question = state
            .current_question()
            .ok_or_else(|| InterviewError::invalid_state("Interview is already finished"))?
            .to_string();

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(InterviewError::validation("answer", "Answer cannot be empty"));
        }

        let sequence_number = u32::try_from(state.turn_index())
            .map_err(|_| InterviewError::invalid_state("Turn index exceeds sequence range"))?;

        self.record_exchange
            .handle(RecordExchangeCommand {
                session_id: *state.session_id(),
                question: question.clone(),
                response: answer.to_string(),
                sequence_number,
            })
            .await?;

        let reached_cap = state.is_last_turn();
        state.record_answer(answer);

        if reached_cap {
            return self.finish(state).await.map(TurnOutcome::Finished);
        }

        let role = self.catalog.get(state.role())?;
        let next = QuestionSequencer::next_question(role, &question, answer, state.turn_index());
        debug!(
            session_id = %state.session_id(),
            turn = state.turn_index(),
            question = next,
            "question asked"
        );
        state.ask(next);

        Ok(TurnOutcome::Asked(next.to_string()))
    }

    /// Completes the session and generates its feedback.
    ///
    /// Only valid once every turn has been answered.
    pub async fn finish(&self, state: &InterviewState) -> Result<Feedback, InterviewError> {
        if !state.is_finished() {
            return Err(InterviewError::invalid_state(format!(
                "Interview has {} of {} answers",
                state.turn_index(),
                state.max_turns()
            )));
        }

        let session_id = *state.session_id();
        self.complete_session
            .handle(CompleteSessionCommand { session_id })
            .await?;
        let feedback = self
            .generate_feedback
            .handle(GenerateFeedbackCommand {
                session_id,
                role: state.role().clone(),
            })
            .await?;

        info!(
            session_id = %session_id,
            role = %state.role(),
            turns = state.turn_index(),
            "interview finished"
        );
        Ok(feedback)
    }
}
