//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers orchestrate one domain operation each. `InterviewFlow` strings
//! them together into a full interview, `VoiceController` adds optional
//! speech on top, and `InterviewServices` wires everything to the ports.

pub mod handlers;
mod interview_flow;
mod services;
mod voice;

pub use handlers::{
    CompleteSessionCommand, CompleteSessionHandler, CreateSessionCommand, CreateSessionHandler,
    GenerateFeedbackCommand, GenerateFeedbackHandler, GetFeedbackHandler, GetFeedbackQuery,
    GetSessionHandler, GetSessionQuery, RecordExchangeCommand, RecordExchangeHandler,
};
pub use interview_flow::{InterviewFlow, TurnOutcome, FAREWELL_MESSAGE};
pub use services::InterviewServices;
pub use voice::{VoiceController, VoiceTask};
