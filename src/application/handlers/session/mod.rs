//! Session command and query handlers.

mod complete_session;
mod create_session;
mod get_session;
mod record_exchange;

pub use complete_session::{CompleteSessionCommand, CompleteSessionHandler};
pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use record_exchange::{RecordExchangeCommand, RecordExchangeHandler};
