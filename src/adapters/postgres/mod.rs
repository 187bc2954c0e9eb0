//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresItemRepository` - List items
//! - `PostgresUserRepository` - Registered users
//!
//! `connect` builds the shared pool from `DatabaseConfig`; the pool is
//! owned by the process and closed on shutdown.

mod item_repository;
mod user_repository;

pub use item_repository::PostgresItemRepository;
pub use user_repository::PostgresUserRepository;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(config.url.expose_secret())
        .await
}

/// Applies the bundled schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Maps a sqlx failure to a `DomainError`, keeping unique-constraint
/// violations (SQLSTATE 23505) distinct from everything else.
pub(crate) fn map_sqlx_error(context: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let mut error = DomainError::new(
                ErrorCode::UniqueViolation,
                format!("{}: {}", context, db_err.message()),
            );
            if let Some(constraint) = db_err.constraint() {
                error = error.with_detail("constraint", constraint);
            }
            return error;
        }
    }
    DomainError::database(format!("{}: {}", context, err))
}
