//! RecordExchangeHandler - Command handler for persisting one answered turn.

use std::sync::Arc;

use tracing::debug;

use crate::domain::exchange::Exchange;
use crate::domain::foundation::SessionId;
use crate::domain::session::InterviewError;
use crate::ports::ExchangeRepository;

/// Command to store a question/answer pair.
#[derive(Debug, Clone)]
pub struct RecordExchangeCommand {
    pub session_id: SessionId,
    pub question: String,
    pub response: String,
    pub sequence_number: u32,
}

/// Handler for recording exchanges.
pub struct RecordExchangeHandler {
    repository: Arc<dyn ExchangeRepository>,
}

impl RecordExchangeHandler {
    pub fn new(repository: Arc<dyn ExchangeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordExchangeCommand) -> Result<Exchange, InterviewError> {
        let exchange = Exchange::new(
            cmd.session_id,
            cmd.question,
            cmd.response,
            cmd.sequence_number,
        );
        self.repository.save(&exchange).await?;

        debug!(
            session_id = %exchange.session_id(),
            turn = exchange.sequence_number(),
            words = exchange.word_count(),
            "exchange recorded"
        );
        Ok(exchange)
    }
}
