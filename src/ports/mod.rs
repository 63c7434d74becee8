//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SessionRepository` - `interview_sessions`
//! - `ExchangeRepository` - `interview_exchanges`
//! - `FeedbackRepository` - `interview_feedback`
//!
//! ## Voice Port
//!
//! - `VoicePlatform` - speech synthesis and recognition engine

mod exchange_repository;
mod feedback_repository;
mod session_repository;
mod voice_platform;

pub use exchange_repository::ExchangeRepository;
pub use feedback_repository::FeedbackRepository;
pub use session_repository::SessionRepository;
pub use voice_platform::{SpeechError, VoicePlatform};
