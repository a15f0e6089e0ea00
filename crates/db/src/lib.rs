//! Persistence layer for the squad builder: connection pool, migrations,
//! entity models, repositories and the dynamic filter composer.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod filter;
pub mod models;
pub mod repositories;
mod tx;

pub use error::{StoreError, StoreResult};

pub type DbPool = sqlx::PgPool;

/// Create a bounded connection pool from a database URL.
///
/// Requests that find the pool exhausted wait until a connection is released.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
