//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod feedback;
pub mod session;

pub use feedback::{
    GenerateFeedbackCommand, GenerateFeedbackHandler, GetFeedbackHandler, GetFeedbackQuery,
};
pub use session::{
    CompleteSessionCommand, CompleteSessionHandler, CreateSessionCommand, CreateSessionHandler,
    GetSessionHandler, GetSessionQuery, RecordExchangeCommand, RecordExchangeHandler,
};
