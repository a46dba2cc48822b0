//! Store whose every call fails like a closed pool

use async_trait::async_trait;

use super::{DbError, UserStore};
use crate::models::{User, UserInput};

pub(crate) struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }
    async fn create(&self, _: &UserInput) -> Result<(), DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }
    async fn get_by_id(&self, _: i64) -> Result<User, DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }
    async fn update_by_id(&self, _: i64, _: &UserInput) -> Result<(), DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }
    async fn delete_by_id(&self, _: i64) -> Result<u64, DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }
    async fn ping(&self) -> Result<(), DbError> {
        Err(sqlx::Error::PoolClosed.into())
    }
}
