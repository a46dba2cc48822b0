//! User repository
//!
//! One parameterized statement per operation. Known gaps kept on purpose:
//! - `create` does not return the generated id
//! - `update_by_id` succeeds even when no row matched
//!
//! Lookup ids are bound as `int8`; Postgres compares them with the
//! `int4` column directly.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{pool, DbError};
use crate::models::{User, UserInput};

/// Storage seam for the users table.
///
/// Handlers receive an `Arc<dyn UserStore>` so tests can swap in
/// [`super::MemoryUserStore`].
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Every row, ordered by id. Empty table yields an empty vector.
    async fn list_all(&self) -> Result<Vec<User>, DbError>;

    async fn create(&self, input: &UserInput) -> Result<(), DbError>;

    /// `DbError::NotFound` when no row matches.
    async fn get_by_id(&self, id: i64) -> Result<User, DbError>;

    async fn update_by_id(&self, id: i64, input: &UserInput) -> Result<(), DbError>;

    /// Number of rows removed (0 or 1).
    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError>;

    /// Readiness check against the backing store.
    async fn ping(&self) -> Result<(), DbError>;
}

/// Postgres-backed repository
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create(&self, input: &UserInput) -> Result<(), DbError> {
        sqlx::query("INSERT INTO users (name, email) VALUES ($1, $2)")
            .bind(&input.name)
            .bind(&input.email)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }

    async fn update_by_id(&self, id: i64, input: &UserInput) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(&input.name)
            .bind(&input.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "Update matched no rows");
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DbError> {
        pool::ping(&self.pool).await
    }
}
