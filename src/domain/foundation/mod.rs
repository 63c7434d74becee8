//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the interview domain.

mod errors;
mod ids;
mod score;
mod session_status;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ExchangeId, FeedbackId, RoleId, SessionId};
pub use score::Score;
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;

/// Number of whitespace-delimited tokens in a free-text answer.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive check for any of `needles` (which must be lowercase).
pub fn contains_any(text_lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text_lower.contains(n))
}
