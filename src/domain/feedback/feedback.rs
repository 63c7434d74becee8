//! Feedback entity and the analyzer output it is built from.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FeedbackId, Score, SessionId, Timestamp};

/// Separator used when lists are rendered as a single line.
pub const LIST_SEPARATOR: &str = "; ";

/// Scores and commentary computed for a session, before it has an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub overall_score: Score,
    pub communication_score: Score,
    pub technical_score: Score,
    /// At most three entries, in the order they were earned.
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub detailed_feedback: String,
}

/// Stored feedback for a completed interview. One per session, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    session_id: SessionId,
    #[serde(flatten)]
    report: FeedbackReport,
    created_at: Timestamp,
}

impl Feedback {
    pub fn new(session_id: SessionId, report: FeedbackReport) -> Self {
        Self {
            id: FeedbackId::new(),
            session_id,
            report,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute feedback from persistence.
    pub fn reconstitute(
        id: FeedbackId,
        session_id: SessionId,
        report: FeedbackReport,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            report,
            created_at,
        }
    }

    pub fn id(&self) -> &FeedbackId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn report(&self) -> &FeedbackReport {
        &self.report
    }

    pub fn overall_score(&self) -> Score {
        self.report.overall_score
    }

    pub fn communication_score(&self) -> Score {
        self.report.communication_score
    }

    pub fn technical_score(&self) -> Score {
        self.report.technical_score
    }

    pub fn strengths(&self) -> &[String] {
        &self.report.strengths
    }

    pub fn areas_for_improvement(&self) -> &[String] {
        &self.report.areas_for_improvement
    }

    pub fn detailed_feedback(&self) -> &str {
        &self.report.detailed_feedback
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Strengths as one display line.
    pub fn strengths_joined(&self) -> String {
        self.report.strengths.join(LIST_SEPARATOR)
    }

    /// Improvement areas as one display line.
    pub fn areas_for_improvement_joined(&self) -> String {
        self.report.areas_for_improvement.join(LIST_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> FeedbackReport {
        FeedbackReport {
            overall_score: Score::NEUTRAL,
            communication_score: Score::NEUTRAL,
            technical_score: Score::NEUTRAL,
            strengths: vec!["A".into(), "B".into()],
            areas_for_improvement: vec!["C".into()],
            detailed_feedback: "text".into(),
        }
    }

    #[test]
    fn joined_lists_use_semicolon_separator() {
        let feedback = Feedback::new(SessionId::new(), report());
        assert_eq!(feedback.strengths_joined(), "A; B");
        assert_eq!(feedback.areas_for_improvement_joined(), "C");
    }

    #[test]
    fn serializes_flat_with_list_fields() {
        let feedback = Feedback::new(SessionId::new(), report());
        let json = serde_json::to_value(&feedback).unwrap();
        assert_eq!(json["overall_score"], 5);
        assert_eq!(json["strengths"], serde_json::json!(["A", "B"]));
        assert!(json.get("report").is_none());
    }
}
