//! Feedback module - post-interview scoring and commentary.
//!
//! - `Feedback` - stored result, one per session
//! - `FeedbackReport` - analyzer output before it is bound to a session
//! - `FeedbackAnalyzer` - pure heuristics over the recorded exchanges

mod analyzer;
mod feedback;
mod narrative;

pub use analyzer::{
    FeedbackAnalyzer, IMPROVE_DETAIL, IMPROVE_KEEP_PRACTICING, IMPROVE_PRACTICE_MORE,
    MAX_STRENGTHS, STRENGTH_DETAILED, STRENGTH_EXAMPLES, STRENGTH_GROWTH, STRENGTH_TEAMWORK,
};
pub use feedback::{Feedback, FeedbackReport, LIST_SEPARATOR};
pub use narrative::Band;
