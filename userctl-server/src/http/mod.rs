//! HTTP layer
//!
//! Axum server with:
//! - Request tracing and panic recovery
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
