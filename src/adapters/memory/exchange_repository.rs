//! In-memory exchange repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::exchange::Exchange;
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::ExchangeRepository;

/// Exchange storage grouped by session. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExchangeRepository {
    exchanges: Arc<RwLock<HashMap<SessionId, Vec<Exchange>>>>,
}

impl InMemoryExchangeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored exchanges across sessions.
    pub async fn count(&self) -> usize {
        self.exchanges.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl ExchangeRepository for InMemoryExchangeRepository {
    async fn save(&self, exchange: &Exchange) -> Result<(), DomainError> {
        self.exchanges
            .write()
            .await
            .entry(*exchange.session_id())
            .or_default()
            .push(exchange.clone());
        Ok(())
    }

    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Exchange>, DomainError> {
        let mut found = self
            .exchanges
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default();
        // stable: equal sequence numbers keep insertion order
        found.sort_by_key(Exchange::sequence_number);
        Ok(found)
    }
}
