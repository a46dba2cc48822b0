//! Route logic with the transport stripped away
//!
//! Each function takes already-validated input and a store, and returns
//! either the payload to serialize or an [`ApiError`]. The axum handlers
//! in `http::routes::users` only extract, call, and wrap.

use crate::db::UserStore;
use crate::error::Result;
use crate::models::{User, UserInput};

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// At least one row was removed
    Deleted { id: i64 },
    /// No row matched; not an error
    NothingMatched,
}

pub async fn list_users(store: &dyn UserStore) -> Result<Vec<User>> {
    let users = store.list_all().await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(users)
}

/// Insert a user and echo the submitted fields.
///
/// The generated id is not looked up; callers see only what they sent.
pub async fn create_user(store: &dyn UserStore, input: UserInput) -> Result<UserInput> {
    store.create(&input).await?;
    tracing::info!(name = %input.name, "Created user");
    Ok(input)
}

pub async fn get_user(store: &dyn UserStore, id: i64) -> Result<User> {
    Ok(store.get_by_id(id).await?)
}

/// Overwrite name and email of `id` and echo the submitted fields.
///
/// Succeeds even when `id` does not exist: the repository does not
/// report zero-row updates.
pub async fn update_user(store: &dyn UserStore, id: i64, input: UserInput) -> Result<UserInput> {
    store.update_by_id(id, &input).await?;
    tracing::info!(id, "Updated user");
    Ok(input)
}

pub async fn delete_user(store: &dyn UserStore, id: i64) -> Result<DeleteOutcome> {
    let rows = store.delete_by_id(id).await?;
    if rows > 0 {
        tracing::info!(id, "Deleted user");
        Ok(DeleteOutcome::Deleted { id })
    } else {
        Ok(DeleteOutcome::NothingMatched)
    }
}
