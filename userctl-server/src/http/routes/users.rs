//! User endpoints
//!
//! Thin adapters: extract, call into [`crate::service`], wrap the result.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::http::extractors::{JsonBody, UserId};
use crate::http::server::AppState;
use crate::models::{User, UserInput};
use crate::service::{self, DeleteOutcome};

/// `{message}` confirmation body
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /users - list every user
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = service::list_users(state.users.as_ref()).await?;
    Ok(Json(users))
}

/// POST /users - create a user, echoing the submitted body
async fn create_user(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<(StatusCode, Json<UserInput>), ApiError> {
    let created = service::create_user(state.users.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = service::get_user(state.users.as_ref(), id).await?;
    Ok(Json(user))
}

/// PUT /users/{id} - overwrite a user, echoing the submitted body
async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(input): JsonBody<UserInput>,
) -> Result<Json<UserInput>, ApiError> {
    let updated = service::update_user(state.users.as_ref(), id, input).await?;
    Ok(Json(updated))
}

/// DELETE /users/{id} - 200 with a message, or 204 when nothing matched
async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Response, ApiError> {
    let response = match service::delete_user(state.users.as_ref(), id).await? {
        DeleteOutcome::Deleted { id } => Json(MessageResponse {
            message: format!("user {} deleted", id),
        })
        .into_response(),
        DeleteOutcome::NothingMatched => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
