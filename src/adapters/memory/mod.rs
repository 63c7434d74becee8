//! In-memory adapters
//!
//! Map-backed implementations of the persistence ports, used when no
//! database is configured and throughout the tests.
//!
//! ```ignore
//! let sessions = Arc::new(InMemorySessionRepository::new());
//! let exchanges = Arc::new(InMemoryExchangeRepository::new());
//! let feedback = Arc::new(InMemoryFeedbackRepository::new());
//! ```

mod exchange_repository;
mod feedback_repository;
mod session_repository;

pub use exchange_repository::InMemoryExchangeRepository;
pub use feedback_repository::InMemoryFeedbackRepository;
pub use session_repository::InMemorySessionRepository;
