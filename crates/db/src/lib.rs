//! Persistence layer: connection pool, query executor, generic entity
//! repository, composite (parent + children) reads, and the entity models.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod aggregate;
pub mod executor;
pub mod models;
pub mod repositories;
pub mod resource;

pub use executor::{Db, QueryError};

pub type DbPool = sqlx::PgPool;

/// Create a bounded connection pool from a database URL.
///
/// A caller that cannot get a connection within `acquire_timeout` fails
/// with [`sqlx::Error::PoolTimedOut`].
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
