//! In-memory [`UserStore`] for tests and local experiments
//!
//! Mirrors the Postgres repository's semantics, including the update
//! that silently matches nothing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DbError, UserStore};
use crate::models::{User, UserInput};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, UserInput>,
}

/// Users table held in a `BTreeMap`; ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Row key for a lookup id; ids outside the `SERIAL` range match nothing.
fn row_key(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .map(|(id, input)| input.clone().into_user(*id))
            .collect())
    }

    async fn create(&self, input: &UserInput) -> Result<(), DbError> {
        let mut table = self.table.lock().await;
        let id = table.next_id.checked_add(1).ok_or(DbError::IdsExhausted)?;
        table.next_id = id;
        table.rows.insert(id, input.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> Result<User, DbError> {
        let table = self.table.lock().await;
        row_key(id)
            .and_then(|key| table.rows.get(&key).map(|input| input.clone().into_user(key)))
            .ok_or(DbError::NotFound { id })
    }

    async fn update_by_id(&self, id: i64, input: &UserInput) -> Result<(), DbError> {
        let mut table = self.table.lock().await;
        if let Some(row) = row_key(id).and_then(|key| table.rows.get_mut(&key)) {
            *row = input.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError> {
        let mut table = self.table.lock().await;
        let removed = row_key(id).and_then(|key| table.rows.remove(&key));
        Ok(removed.map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
