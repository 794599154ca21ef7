//! Schema migrations.
//!
//! Migrations are embedded at compile time from the workspace `migrations/`
//! directory and applied on startup, before any repository touches the pool.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use fest_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply any migrations the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!(
        known_migrations = MIGRATOR.iter().count(),
        "Database schema is up to date"
    );
    Ok(())
}
