//! Telemetry configuration and subscriber setup

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit newline-delimited JSON instead of the human-readable format
    #[serde(default)]
    pub json_logs: bool,
}

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl TelemetryConfig {
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    fn env_filter(&self) -> Result<EnvFilter, ValidationError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.env_filter().map(|_| ())
    }

    /// Install the global `tracing` subscriber.
    ///
    /// A subscriber that is already installed is left in place, so calling
    /// this more than once is harmless.
    pub fn init_subscriber(&self) -> Result<(), ValidationError> {
        let builder = tracing_subscriber::fmt().with_env_filter(self.env_filter()?);
        let installed = if self.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        if installed.is_ok() {
            tracing::debug!(
                environment = ?self.environment,
                json = self.json_logs,
                "tracing subscriber installed"
            );
        }
        Ok(())
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

fn default_log_level() -> String {
    "info,interview_coach=debug,sqlx=warn".to_string()
}
