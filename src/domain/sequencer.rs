//! Question Sequencer - picks the next interview question.
//!
//! Stateless and deterministic: everything it needs is passed in. The rule
//! order below decides which question is observed, so it must not change:
//!
//! 1. Turn 0 asks the role's first seed question.
//! 2. A short answer early on gets the elaboration probe.
//! 3. An open "Tell me about"/"Describe" question answered without an
//!    example gets the example probe.
//! 4. Remaining seed questions, then fallback questions, in order.
//! 5. The closing remark once both banks are exhausted.

use crate::domain::foundation::{contains_any, word_count};
use crate::domain::role::Role;

/// Asked when an early answer is too short.
pub const ELABORATION_PROBE: &str =
    "Can you elaborate more on that? I'd like to hear more details.";

/// Asked when an open question was answered without a concrete example.
pub const EXAMPLE_PROBE: &str =
    "That's interesting. Can you give me a specific example of when this happened?";

/// Returned once seed and fallback questions are used up.
pub const CLOSING_REMARK: &str = "Thank you for your responses. Is there anything else you'd like to add about your qualifications for this role?";

/// Answers shorter than this get the elaboration probe.
const ELABORATION_WORD_THRESHOLD: usize = 20;
/// Elaboration probe is only used before this turn.
const ELABORATION_TURN_LIMIT: usize = 3;
/// Example probe is only used before this turn.
const EXAMPLE_TURN_LIMIT: usize = 4;

const EXAMPLE_MARKERS: &[&str] = &["example", "time when", "instance"];
const OPEN_QUESTION_MARKERS: &[&str] = &["Tell me about", "Describe"];

/// Chooses interview questions from a role's banks.
pub struct QuestionSequencer;

impl QuestionSequencer {
    /// Returns the question to ask at `turn_index`, given the previous turn.
    ///
    /// There is no upper bound on `turn_index`; past both banks the closing
    /// remark is returned for every turn.
    pub fn next_question<'a>(
        role: &'a Role,
        previous_question: &str,
        previous_answer: &str,
        turn_index: usize,
    ) -> &'a str {
        if turn_index == 0 {
            return role.first_question();
        }

        let words = word_count(previous_answer);
        let has_example = contains_any(&previous_answer.to_lowercase(), EXAMPLE_MARKERS);

        if words < ELABORATION_WORD_THRESHOLD && turn_index < ELABORATION_TURN_LIMIT {
            return ELABORATION_PROBE;
        }

        // case-sensitive match
        let open_question = OPEN_QUESTION_MARKERS
            .iter()
            .any(|m| previous_question.contains(m));
        if !has_example && turn_index < EXAMPLE_TURN_LIMIT && open_question {
            return EXAMPLE_PROBE;
        }

        Self::banked_question(role, turn_index)
    }

    /// Seed question at `turn_index`, else the matching fallback, else the
    /// closing remark.
    fn banked_question(role: &Role, turn_index: usize) -> &str {
        let seeds = role.seed_questions();
        if let Some(q) = seeds.get(turn_index) {
            return q;
        }
        role.fallback_questions()
            .get(turn_index - seeds.len())
            .map(String::as_str)
            .unwrap_or(CLOSING_REMARK)
    }
}
