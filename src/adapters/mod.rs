//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Map-backed repositories (default store, tests)
//! - `postgres` - sqlx repositories over the interview tables
//! - `voice` - Voice platform implementations

pub mod memory;
pub mod postgres;
pub mod voice;

pub use memory::{InMemoryExchangeRepository, InMemoryFeedbackRepository, InMemorySessionRepository};
pub use postgres::{PostgresExchangeRepository, PostgresFeedbackRepository, PostgresSessionRepository};
pub use voice::UnsupportedVoice;
