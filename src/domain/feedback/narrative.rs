//! Narrative text for a feedback report.

use crate::domain::foundation::Score;
use crate::domain::role::Role;

/// Qualitative band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Strong,
    Solid,
    Developing,
}

impl Band {
    pub fn of(score: Score) -> Self {
        match score.value() {
            7..=u8::MAX => Band::Strong,
            5..=6 => Band::Solid,
            _ => Band::Developing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Strong => "strong",
            Band::Solid => "solid",
            Band::Developing => "developing",
        }
    }
}

fn communication_comment(band: Band) -> &'static str {
    match band {
        Band::Strong => "You communicate clearly and provide comprehensive answers.",
        Band::Solid => "Your communication is adequate but could be more detailed.",
        Band::Developing => "Focus on providing more structured and detailed responses.",
    }
}

fn technical_comment(band: Band) -> &'static str {
    match band {
        Band::Strong => "You demonstrate strong relevant knowledge with concrete examples.",
        Band::Solid => "You show basic understanding but could provide more specific examples.",
        Band::Developing => {
            "Work on incorporating more specific examples and demonstrating deeper knowledge."
        }
    }
}

/// Renders the detailed feedback paragraph shown after an interview.
pub fn render(
    role: &Role,
    answered: usize,
    overall: Score,
    communication: Score,
    technical: Score,
) -> String {
    format!(
        "Interview Performance Summary for {name}:\n\
         \n\
         You answered {answered} questions during this mock interview. \
         Your responses demonstrate {overall_band} interview skills.\n\
         \n\
         Communication ({c}/10): {c_comment}\n\
         \n\
         Technical Knowledge ({t}/10): {t_comment}\n\
         \n\
         Key Areas Assessed: {focus}\n\
         \n\
         Keep practicing to refine your interview skills!",
        name = role.name(),
        answered = answered,
        overall_band = Band::of(overall).label(),
        c = communication.value(),
        c_comment = communication_comment(Band::of(communication)),
        t = technical.value(),
        t_comment = technical_comment(Band::of(technical)),
        focus = role.focus_areas().join(", "),
    )
}
