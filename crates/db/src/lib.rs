//! Data access layer: connection pool helpers, entity models, and the
//! unit-of-work repository.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub use campus_core::types::DbId;

pub type DbPool = sqlx::PgPool;

/// Errors produced by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A store-level failure (connectivity, constraint violation at
    /// commit time). Classified into an HTTP status by the api crate.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A scheduled replace or delete matched no row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The instance is not tracked by this unit of work; callers must
    /// re-attach untracked instances before updating or removing them.
    #[error("{entity} with id {id} is not tracked by this unit of work")]
    NotTracked { entity: &'static str, id: DbId },
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
