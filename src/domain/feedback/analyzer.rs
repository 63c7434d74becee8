//! Feedback Analyzer - keyword and length heuristics over a whole interview.
//!
//! A pure left fold over the exchanges. Scores start at 5 and move one point
//! per qualifying answer, saturating at 1 and 10. Strengths are capped at
//! three entries in the order they were first earned; improvement areas are
//! deduplicated but uncapped.

use crate::domain::exchange::Exchange;
use crate::domain::foundation::{contains_any, Score};
use crate::domain::role::Role;

use super::narrative;
use super::FeedbackReport;

pub const STRENGTH_DETAILED: &str = "Provides detailed responses";
pub const STRENGTH_EXAMPLES: &str = "Uses specific examples to support answers";
pub const STRENGTH_TEAMWORK: &str = "Demonstrates teamwork and collaboration";
pub const STRENGTH_GROWTH: &str = "Shows growth mindset and adaptability";

pub const IMPROVE_DETAIL: &str = "Provide more detailed answers with specific examples";
pub const IMPROVE_PRACTICE_MORE: &str = "Practice answering more questions to build confidence";
pub const IMPROVE_KEEP_PRACTICING: &str = "Continue practicing with different scenarios";

/// Maximum number of strengths reported.
pub const MAX_STRENGTHS: usize = 3;

/// Answers longer than this many words count as detailed.
const DETAILED_WORDS: usize = 50;
/// Answers shorter than this many words count as too brief.
const BRIEF_WORDS: usize = 15;
/// Interviews with fewer answers get the practice-more suggestion.
const MIN_EXCHANGES: usize = 5;

const EXAMPLE_MARKERS: &[&str] = &["example", "instance", "time when", "situation"];
const TEAMWORK_MARKERS: &[&str] = &["team", "collaborate", "together"];
const GROWTH_MARKERS: &[&str] = &["learned", "improved", "developed"];

/// Running state of the fold.
#[derive(Debug)]
struct Tally {
    communication: Score,
    technical: Score,
    strengths: Vec<String>,
    improvements: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            communication: Score::NEUTRAL,
            technical: Score::NEUTRAL,
            strengths: Vec::new(),
            improvements: Vec::new(),
        }
    }

    fn has_room(&self) -> bool {
        self.strengths.len() < MAX_STRENGTHS
    }

    fn add_strength_once(&mut self, strength: &str) {
        if self.has_room() && !self.strengths.iter().any(|s| s == strength) {
            self.strengths.push(strength.to_string());
        }
    }

    fn add_improvement_once(&mut self, improvement: &str) {
        if !self.improvements.iter().any(|s| s == improvement) {
            self.improvements.push(improvement.to_string());
        }
    }

    fn absorb(mut self, exchange: &Exchange) -> Self {
        let words = exchange.word_count();
        if words > DETAILED_WORDS {
            self.communication = self.communication.raised();
            // only the capacity check applies here, so repeats can fill the list
            if self.has_room() {
                self.strengths.push(STRENGTH_DETAILED.to_string());
            }
        } else if words < BRIEF_WORDS {
            self.communication = self.communication.lowered();
            self.add_improvement_once(IMPROVE_DETAIL);
        }

        let answer = exchange.response().to_lowercase();
        if contains_any(&answer, EXAMPLE_MARKERS) {
            self.technical = self.technical.raised();
            self.add_strength_once(STRENGTH_EXAMPLES);
        }
        if contains_any(&answer, TEAMWORK_MARKERS) {
            self.add_strength_once(STRENGTH_TEAMWORK);
        }
        if contains_any(&answer, GROWTH_MARKERS) {
            self.add_strength_once(STRENGTH_GROWTH);
        }
        self
    }
}

/// Computes interview feedback from the recorded exchanges.
pub struct FeedbackAnalyzer;

impl FeedbackAnalyzer {
    /// Analyzes `exchanges` (expected in ascending sequence order) for `role`.
    pub fn analyze(role: &Role, exchanges: &[Exchange]) -> FeedbackReport {
        let mut tally = exchanges.iter().fold(Tally::new(), Tally::absorb);

        if exchanges.len() < MIN_EXCHANGES {
            tally.add_improvement_once(IMPROVE_PRACTICE_MORE);
        }
        if tally.improvements.is_empty() {
            tally.improvements.push(IMPROVE_KEEP_PRACTICING.to_string());
        }

        let overall = Score::mean(tally.communication, tally.technical);
        let detailed_feedback = narrative::render(
            role,
            exchanges.len(),
            overall,
            tally.communication,
            tally.technical,
        );

        FeedbackReport {
            overall_score: overall,
            communication_score: tally.communication,
            technical_score: tally.technical,
            strengths: tally.strengths,
            areas_for_improvement: tally.improvements,
            detailed_feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RoleId, SessionId};
    use crate::domain::role::RoleCatalog;
    use proptest::prelude::*;

    fn engineer() -> Role {
        RoleCatalog::builtin()
            .get(&RoleId::new("engineer").unwrap())
            .unwrap()
            .clone()
    }

    fn exchanges(answers: &[&str]) -> Vec<Exchange> {
        let session_id = SessionId::new();
        answers
            .iter()
            .enumerate()
            .map(|(i, a)| Exchange::new(session_id, "Question?", *a, i as u32))
            .collect()
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn empty_interview_scores_five_and_asks_for_more_practice() {
        let report = FeedbackAnalyzer::analyze(&engineer(), &[]);

        assert_eq!(report.overall_score.value(), 5);
        assert_eq!(report.communication_score.value(), 5);
        assert_eq!(report.technical_score.value(), 5);
        assert!(report.strengths.is_empty());
        assert_eq!(
            report.areas_for_improvement,
            vec![IMPROVE_PRACTICE_MORE.to_string()]
        );
    }

    #[test]
    fn keep_practicing_only_when_nothing_else_to_improve() {
        let medium = words(30);
        let answers: Vec<&str> = vec![medium.as_str(); 5];
        let report = FeedbackAnalyzer::analyze(&engineer(), &exchanges(&answers));
        assert_eq!(
            report.areas_for_improvement,
            vec![IMPROVE_KEEP_PRACTICING.to_string()]
        );
    }

    #[test]
    fn one_answer_earns_all_three_keyword_strengths() {
        let report = FeedbackAnalyzer::analyze(
            &engineer(),
            &exchanges(&["For example, I learned to collaborate with my team"]),
        );

        assert_eq!(
            report.strengths,
            vec![
                STRENGTH_EXAMPLES.to_string(),
                STRENGTH_TEAMWORK.to_string(),
                STRENGTH_GROWTH.to_string(),
            ]
        );
        assert_eq!(report.technical_score.value(), 6);
        // 9 words is brief
        assert_eq!(report.communication_score.value(), 4);
        assert_eq!(report.overall_score.value(), 5);
        assert_eq!(
            report.areas_for_improvement,
            vec![IMPROVE_DETAIL.to_string(), IMPROVE_PRACTICE_MORE.to_string()]
        );
    }

    #[test]
    fn brief_answers_lower_communication_once_per_answer() {
        let report =
            FeedbackAnalyzer::analyze(&engineer(), &exchanges(&["no", "not really", "maybe"]));
        assert_eq!(report.communication_score.value(), 2);
        assert_eq!(
            report
                .areas_for_improvement
                .iter()
                .filter(|s| *s == IMPROVE_DETAIL)
                .count(),
            1
        );
    }

    #[test]
    fn communication_floor_is_one() {
        let answers = vec!["no"; 9];
        let report = FeedbackAnalyzer::analyze(&engineer(), &exchanges(&answers));
        assert_eq!(report.communication_score.value(), 1);
        assert_eq!(report.overall_score.value(), 3);
    }

    #[test]
    fn detailed_answers_raise_communication_and_cap_at_ten() {
        let long = words(60);
        let answers: Vec<&str> = vec![long.as_str(); 8];
        let report = FeedbackAnalyzer::analyze(&engineer(), &exchanges(&answers));
        assert_eq!(report.communication_score.value(), 10);
        assert_eq!(report.technical_score.value(), 5);
        assert_eq!(report.overall_score.value(), 8);
    }

    #[test]
    fn strengths_are_capped_at_three() {
        let long_with_everything = format!(
            "{} for example my team learned a lot",
            words(50)
        );
        let answers = vec![long_with_everything.as_str(); 4];
        let report = FeedbackAnalyzer::analyze(&engineer(), &exchanges(&answers));
        assert_eq!(report.strengths.len(), MAX_STRENGTHS);
        assert_eq!(report.strengths[0], STRENGTH_DETAILED);
        assert_eq!(report.strengths[1], STRENGTH_EXAMPLES);
        assert_eq!(report.strengths[2], STRENGTH_TEAMWORK);
    }

    #[test]
    fn fifty_words_is_neither_brief_nor_detailed() {
        let fifty = words(50);
        let fifteen = words(15);
        let report =
            FeedbackAnalyzer::analyze(&engineer(), &exchanges(&[fifty.as_str(), fifteen.as_str()]));
        assert_eq!(report.communication_score.value(), 5);
        assert!(report.strengths.is_empty());
    }

    #[test]
    fn situation_counts_as_example_for_technical_score() {
        let report = FeedbackAnalyzer::analyze(
            &engineer(),
            &exchanges(&["In that SITUATION I paged the on-call and rolled the deploy back quickly"]),
        );
        assert_eq!(report.technical_score.value(), 6);
    }

    #[test]
    fn narrative_names_role_and_focus_areas() {
        let report = FeedbackAnalyzer::analyze(&engineer(), &[]);
        assert!(report
            .detailed_feedback
            .starts_with("Interview Performance Summary for Software Engineer:"));
        assert!(report.detailed_feedback.contains("You answered 0 questions"));
        assert!(report.detailed_feedback.contains(
            "Key Areas Assessed: problem-solving, technical knowledge, collaboration, continuous learning"
        ));
    }

    proptest! {
        #[test]
        fn scores_stay_in_scale_for_any_answers(answers in proptest::collection::vec(".{0,400}", 0..20)) {
            let refs: Vec<&str> = answers.iter().map(String::as_str).collect();
            let report = FeedbackAnalyzer::analyze(&engineer(), &exchanges(&refs));
            for score in [report.overall_score, report.communication_score, report.technical_score] {
                prop_assert!((1..=10).contains(&score.value()));
            }
            prop_assert!(report.strengths.len() <= MAX_STRENGTHS);
            prop_assert!(!report.areas_for_improvement.is_empty());
        }
    }
}
