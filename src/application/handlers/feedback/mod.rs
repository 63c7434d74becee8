//! Feedback command and query handlers.

mod generate_feedback;
mod get_feedback;

pub use generate_feedback::{GenerateFeedbackCommand, GenerateFeedbackHandler};
pub use get_feedback::{GetFeedbackHandler, GetFeedbackQuery};
