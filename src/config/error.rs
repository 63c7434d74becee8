//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("max_turns must be between 1 and 50, got {0}")]
    InvalidMaxTurns(usize),

    #[error("listen_timeout_secs must be between 1 and 300, got {0}")]
    InvalidListenTimeout(u64),

    #[error("Roles file path is empty")]
    EmptyRolesFile,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
