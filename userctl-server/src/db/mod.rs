//! Database layer - connection pool and user repository
//!
//! - One `PgPool` per process, opened and pinged at startup
//! - Every statement uses positional binds (`$1`, `$2`), never concatenation
//! - No transactions: each repository call is a single statement

pub mod memory;
pub mod pool;
pub mod users;

#[cfg(test)]
pub(crate) mod failing;

use crate::config::ConfigError;

pub use memory::MemoryUserStore;
pub use pool::{create_pool, open};
pub use users::{PgUserStore, UserStore};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("user {id} not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("user id sequence exhausted")]
    IdsExhausted,
}
