//! Exchange repository port.
//!
//! Backs the `interview_exchanges` table. Exchanges are append-only.

use crate::domain::exchange::Exchange;
use crate::domain::foundation::{DomainError, SessionId};
use async_trait::async_trait;

/// Repository port for recorded interview turns.
#[async_trait]
pub trait ExchangeRepository: Send + Sync {
    /// Append one exchange.
    ///
    /// Sequence numbers are not checked for gaps or duplicates.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, exchange: &Exchange) -> Result<(), DomainError>;

    /// All exchanges of a session, ascending by sequence number.
    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Exchange>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ExchangeRepository) {}
    }
}
