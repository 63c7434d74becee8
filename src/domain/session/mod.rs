//! Session domain module.
//!
//! Interview session lifecycle (`in_progress` → `completed`), the explicit
//! turn state used while an interview runs, and the error taxonomy the
//! application layer reports.

mod aggregate;
mod errors;
mod state;

pub use aggregate::InterviewSession;
pub use errors::InterviewError;
pub use state::{InterviewState, Turn};
