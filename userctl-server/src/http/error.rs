//! HTTP mapping for [`ApiError`]
//!
//! Body keys differ by status: 400 and 500 use `error`, 404 uses
//! `message`. Clients already depend on this shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::ApiError;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest(reason) => json!({ "error": reason }),
            Self::NotFound { .. } => json!({ "message": "user not found" }),
            Self::Database(e) => {
                // Raw driver message goes back to the client as well
                tracing::error!("Database error: {}", e);
                json!({ "error": e.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}
