//! Explicit per-interview state threaded through the interview flow.
//!
//! Holds what a UI would otherwise keep in view variables: which turn we are
//! on, the question currently awaiting an answer, and the transcript so far.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RoleId, SessionId};

/// One answered turn of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub question: String,
    pub answer: String,
}

/// State of an interview in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewState {
    session_id: SessionId,
    role: RoleId,
    max_turns: usize,
    /// Number of answers recorded so far; also the next sequence number.
    turn_index: usize,
    /// Question awaiting an answer; `None` once the interview is finished.
    current_question: Option<String>,
    history: Vec<Turn>,
}

impl InterviewState {
    pub fn new(
        session_id: SessionId,
        role: RoleId,
        max_turns: usize,
        first_question: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            role,
            max_turns,
            turn_index: 0,
            current_question: Some(first_question.into()),
            history: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn role(&self) -> &RoleId {
        &self.role
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn current_question(&self) -> Option<&str> {
        self.current_question.as_deref()
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        self.current_question.is_none()
    }

    /// Whether the next recorded answer reaches the turn cap.
    pub fn is_last_turn(&self) -> bool {
        self.turn_index + 1 >= self.max_turns
    }

    /// `(answered, total)` for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.turn_index.min(self.max_turns), self.max_turns)
    }

    /// Records the answer to the current question and moves to the next
    /// turn. Returns the answered turn, or `None` if already finished.
    pub(crate) fn record_answer(&mut self, answer: impl Into<String>) -> Option<&Turn> {
        let question = self.current_question.take()?;
        self.history.push(Turn {
            question,
            answer: answer.into(),
        });
        self.turn_index += 1;
        self.history.last()
    }

    /// Sets the question for the current turn.
    pub(crate) fn ask(&mut self, question: impl Into<String>) {
        self.current_question = Some(question.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(max_turns: usize) -> InterviewState {
        InterviewState::new(SessionId::new(), RoleId::new("sales").unwrap(), max_turns, "Q0")
    }

    #[test]
    fn new_state_asks_first_question() {
        let s = state(8);
        assert_eq!(s.current_question(), Some("Q0"));
        assert_eq!(s.turn_index(), 0);
        assert_eq!(s.progress(), (0, 8));
        assert!(!s.is_finished());
    }

    #[test]
    fn record_answer_appends_turn_and_clears_question() {
        let mut s = state(8);
        let turn = s.record_answer("A0").cloned().unwrap();
        assert_eq!(turn.question, "Q0");
        assert_eq!(turn.answer, "A0");
        assert_eq!(s.turn_index(), 1);
        assert!(s.is_finished());

        s.ask("Q1");
        assert_eq!(s.current_question(), Some("Q1"));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn record_answer_without_question_is_ignored() {
        let mut s = state(1);
        s.record_answer("A0");
        assert!(s.record_answer("again").is_none());
        assert_eq!(s.turn_index(), 1);
    }

    #[test]
    fn last_turn_detection() {
        let mut s = state(2);
        assert!(!s.is_last_turn());
        s.record_answer("A0");
        s.ask("Q1");
        assert!(s.is_last_turn());
    }
}
