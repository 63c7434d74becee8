//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `INTERVIEW_COACH`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use interview_coach::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.telemetry.init_subscriber().expect("Invalid log filter");
//!
//! println!("Interviews run for {} turns", config.interview.max_turns);
//! ```

mod database;
mod error;
mod interview;
mod telemetry;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use interview::{InterviewConfig, MAX_LISTEN_TIMEOUT_SECS, MAX_TURNS_LIMIT};
pub use telemetry::{Environment, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection; sessions are kept in memory when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Turn cap, voice and role catalog settings
    #[serde(default)]
    pub interview: InterviewConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INTERVIEW_COACH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `INTERVIEW_COACH__INTERVIEW__MAX_TURNS=5` -> `interview.max_turns = 5`
    /// - `INTERVIEW_COACH__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INTERVIEW_COACH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.interview.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.telemetry.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "INTERVIEW_COACH__DATABASE__URL",
        "INTERVIEW_COACH__DATABASE__MAX_CONNECTIONS",
        "INTERVIEW_COACH__INTERVIEW__MAX_TURNS",
        "INTERVIEW_COACH__INTERVIEW__VOICE_ENABLED",
        "INTERVIEW_COACH__INTERVIEW__ROLES_FILE",
        "INTERVIEW_COACH__TELEMETRY__ENVIRONMENT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_defaults_without_any_variables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert!(config.database.is_none());
        assert_eq!(config.interview, InterviewConfig::default());
        assert_eq!(config.telemetry.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("INTERVIEW_COACH__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("INTERVIEW_COACH__DATABASE__MAX_CONNECTIONS", "10");
        env::set_var("INTERVIEW_COACH__INTERVIEW__MAX_TURNS", "5");
        env::set_var("INTERVIEW_COACH__INTERVIEW__VOICE_ENABLED", "false");
        env::set_var("INTERVIEW_COACH__INTERVIEW__ROLES_FILE", "/etc/roles.yaml");
        env::set_var("INTERVIEW_COACH__TELEMETRY__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url, "postgresql://test@localhost/test");
        assert_eq!(database.max_connections, 10);
        assert_eq!(config.interview.max_turns, 5);
        assert!(!config.interview.voice_enabled);
        assert_eq!(
            config.interview.roles_file.as_deref(),
            Some(std::path::Path::new("/etc/roles.yaml"))
        );
        assert!(config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_reports_bad_section() {
        let config = AppConfig {
            database: Some(DatabaseConfig::with_url("mysql://localhost/test")),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatabaseUrl));
    }
}
