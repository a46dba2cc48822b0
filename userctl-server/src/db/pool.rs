//! Database connection pool management
//!
//! Uses sqlx PgPool with the driver's default sizing.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};

use super::DbError;
use crate::config::DatabaseConfig;

/// Open the pool described by `config` and verify the database answers.
///
/// # Errors
///
/// Fails if the options cannot be built, no connection can be
/// established, or the ping fails.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool = open(&config).await?;
/// ```
pub async fn open(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let options = config.connect_options()?;
    tracing::info!(db = %config.describe(), "Connecting to database");

    let pool = create_pool(options).await?;
    ping(&pool).await?;

    tracing::info!("Database connection verified");
    Ok(pool)
}

/// Create a PostgreSQL connection pool.
pub async fn create_pool(options: PgConnectOptions) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

/// Liveness check on one pooled connection.
pub async fn ping(pool: &PgPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}
