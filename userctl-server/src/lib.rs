//! userctl-server: CRUD over the `users` table
//!
//! Layers, leaf first:
//! - [`config`]: database settings from the environment
//! - [`db`]: connection pool and the [`db::UserStore`] repository
//! - [`service`]: one plain function per route, no HTTP types
//! - [`http`]: axum adapters, error mapping, server lifecycle

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;

pub use error::{ApiError, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};
