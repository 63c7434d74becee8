//! InterviewServices - wires ports, handlers and the interview flow.

use std::sync::Arc;

use tracing::info;

use super::handlers::{
    CompleteSessionHandler, CreateSessionHandler, GenerateFeedbackHandler, GetFeedbackHandler,
    GetSessionHandler, RecordExchangeHandler,
};
use super::interview_flow::InterviewFlow;
use super::voice::VoiceController;
use crate::adapters::memory::{
    InMemoryExchangeRepository, InMemoryFeedbackRepository, InMemorySessionRepository,
};
use crate::adapters::postgres::{
    self, PostgresExchangeRepository, PostgresFeedbackRepository, PostgresSessionRepository,
};
use crate::config::{AppConfig, InterviewConfig};
use crate::domain::role::RoleCatalog;
use crate::domain::session::InterviewError;
use crate::ports::{ExchangeRepository, FeedbackRepository, SessionRepository, VoicePlatform};

/// Shared ports plus the settings handlers are built with.
#[derive(Clone)]
pub struct InterviewServices {
    catalog: Arc<RoleCatalog>,
    sessions: Arc<dyn SessionRepository>,
    exchanges: Arc<dyn ExchangeRepository>,
    feedback: Arc<dyn FeedbackRepository>,
    config: InterviewConfig,
}

impl std::fmt::Debug for InterviewServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterviewServices")
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl InterviewServices {
    pub fn new(
        catalog: RoleCatalog,
        config: InterviewConfig,
        sessions: Arc<dyn SessionRepository>,
        exchanges: Arc<dyn ExchangeRepository>,
        feedback: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions,
            exchanges,
            feedback,
            config,
        }
    }

    /// Services over fresh in-memory repositories.
    pub fn in_memory(catalog: RoleCatalog, config: InterviewConfig) -> Self {
        Self::new(
            catalog,
            config,
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(InMemoryExchangeRepository::new()),
            Arc::new(InMemoryFeedbackRepository::new()),
        )
    }

    /// Builds services from loaded configuration.
    ///
    /// Uses PostgreSQL when a database is configured and memory otherwise.
    /// The role catalog comes from `interview.roles_file` when set.
    pub async fn connect(config: &AppConfig) -> Result<Self, InterviewError> {
        config
            .validate()
            .map_err(|e| InterviewError::validation("config", e.to_string()))?;

        let catalog = match &config.interview.roles_file {
            Some(path) => RoleCatalog::from_yaml_file(path)?,
            None => RoleCatalog::builtin(),
        };

        let services = match &config.database {
            Some(database) => {
                let pool = postgres::connect(database).await?;
                info!(
                    max_connections = database.max_connections,
                    "using PostgreSQL interview store"
                );
                Self::new(
                    catalog,
                    config.interview.clone(),
                    Arc::new(PostgresSessionRepository::new(pool.clone())),
                    Arc::new(PostgresExchangeRepository::new(pool.clone())),
                    Arc::new(PostgresFeedbackRepository::new(pool)),
                )
            }
            None => {
                info!("no database configured, using in-memory interview store");
                Self::in_memory(catalog, config.interview.clone())
            }
        };

        info!(
            roles = services.catalog.roles().len(),
            max_turns = services.config.max_turns,
            "interview services ready"
        );
        Ok(services)
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &InterviewConfig {
        &self.config
    }

    pub fn flow(&self) -> InterviewFlow {
        InterviewFlow::new(
            self.catalog.clone(),
            self.sessions.clone(),
            self.exchanges.clone(),
            self.feedback.clone(),
            self.config.max_turns,
        )
    }

    pub fn voice(&self, platform: Arc<dyn VoicePlatform>) -> VoiceController {
        VoiceController::new(
            platform,
            self.config.listen_timeout(),
            self.config.voice_enabled,
        )
    }

    pub fn create_session(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.sessions.clone(), self.catalog.clone())
    }

    pub fn record_exchange(&self) -> RecordExchangeHandler {
        RecordExchangeHandler::new(self.exchanges.clone())
    }

    pub fn complete_session(&self) -> CompleteSessionHandler {
        CompleteSessionHandler::new(self.sessions.clone())
    }

    pub fn get_session(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.sessions.clone())
    }

    pub fn generate_feedback(&self) -> GenerateFeedbackHandler {
        GenerateFeedbackHandler::new(
            self.exchanges.clone(),
            self.feedback.clone(),
            self.catalog.clone(),
        )
    }

    pub fn get_feedback(&self) -> GetFeedbackHandler {
        GetFeedbackHandler::new(self.feedback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::voice::UnsupportedVoice;
    use crate::config::DatabaseConfig;
    use crate::domain::foundation::RoleId;
    use std::io::Write;

    #[tokio::test]
    async fn connect_without_database_uses_memory() {
        let services = InterviewServices::connect(&AppConfig::default()).await.unwrap();

        assert_eq!(services.catalog(), &RoleCatalog::builtin());
        assert_eq!(services.flow().max_turns(), 8);
    }

    #[tokio::test]
    async fn connect_loads_roles_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "roles:\n  - id: barista\n    name: Barista\n    description: Coffee bar\n    seed_questions:\n      - Tell me about your favourite drink.\n"
        )
        .unwrap();
        let config = AppConfig {
            interview: InterviewConfig {
                roles_file: Some(file.path().to_path_buf()),
                ..Default::default()
            },
            ..Default::default()
        };

        let services = InterviewServices::connect(&config).await.unwrap();
        let state = services
            .flow()
            .start(RoleId::new("barista").unwrap())
            .await
            .unwrap();

        assert_eq!(state.current_question(), Some("Tell me about your favourite drink."));
    }

    #[tokio::test]
    async fn connect_rejects_invalid_config() {
        let config = AppConfig {
            database: Some(DatabaseConfig::with_url("mysql://localhost/db")),
            ..Default::default()
        };

        let err = InterviewServices::connect(&config).await.unwrap_err();
        assert!(matches!(err, InterviewError::Validation { ref field, .. } if field == "config"));
    }

    #[tokio::test]
    async fn handlers_share_the_same_store() {
        let services = InterviewServices::in_memory(RoleCatalog::builtin(), InterviewConfig::default());
        let session = services
            .create_session()
            .handle(crate::application::handlers::CreateSessionCommand {
                role: RoleId::new("retail").unwrap(),
            })
            .await
            .unwrap();

        let found = services
            .get_session()
            .handle(crate::application::handlers::GetSessionQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();
        assert_eq!(found, session);
    }

    #[test]
    fn voice_follows_config() {
        let services = InterviewServices::in_memory(
            RoleCatalog::builtin(),
            InterviewConfig {
                voice_enabled: false,
                ..Default::default()
            },
        );
        let voice = services.voice(Arc::new(UnsupportedVoice));
        assert!(!voice.is_enabled());
    }
}
