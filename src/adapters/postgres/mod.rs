//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSessionRepository` - `interview_sessions`
//! - `PostgresExchangeRepository` - `interview_exchanges`
//! - `PostgresFeedbackRepository` - `interview_feedback`
//!
//! The schema lives in `migrations/` and is applied by [`connect`] when
//! `run_migrations` is set.

mod exchange_repository;
mod feedback_repository;
mod session_repository;

pub use exchange_repository::PostgresExchangeRepository;
pub use feedback_repository::PostgresFeedbackRepository;
pub use session_repository::PostgresSessionRepository;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, Row};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Open a connection pool sized by `config`, migrating first if asked to.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| DomainError::database("Failed to run migrations", e))?;
        tracing::info!("database migrations applied");
    }

    Ok(pool)
}

/// Read one column, mapping decode failures to `DatabaseError`.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to read column {}", name), e))
}
