//! Database configuration loaded from environment variables
//!
//! - `DATABASE_URL`: full connection string, takes precedence when set
//! - `DB_USER`, `DB_PASSWORD`, `DB_NAME`: required otherwise
//! - `DB_HOST`: `host:port` (default: localhost:5432)
//!
//! A `.env` file in the working directory is honored via [`load_dotenv`].

use std::path::PathBuf;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

pub const DEFAULT_DB_HOST: &str = "localhost:5432";
const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("invalid DB_HOST '{value}': {reason}")]
    InvalidHost { value: String, reason: &'static str },

    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

/// Load `.env` from the current directory, if present.
///
/// Variables already set in the process environment win. Returns the
/// path that was loaded; a missing or unreadable file is not an error.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Connection settings for the users database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// Full connection string from `DATABASE_URL`
    Url(String),

    /// Assembled from the individual `DB_*` variables
    Parts {
        user: String,
        password: String,
        name: String,
        host: String,
    },
}

impl DatabaseConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            return Ok(Self::Url(url));
        }

        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Self::Parts {
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            name: required("DB_NAME")?,
            host: lookup("DB_HOST")
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
        })
    }

    /// Build driver connect options.
    ///
    /// Assembled configs use TLS when the server offers it, without
    /// certificate verification.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match self {
            Self::Url(url) => url.parse().map_err(ConfigError::InvalidUrl),
            Self::Parts {
                user,
                password,
                name,
                host,
            } => {
                let (hostname, port) = split_host_port(host)?;
                Ok(PgConnectOptions::new()
                    .host(hostname)
                    .port(port)
                    .username(user)
                    .password(password)
                    .database(name)
                    .ssl_mode(PgSslMode::Prefer))
            }
        }
    }

    /// Connection target for logs, without credentials.
    pub fn describe(&self) -> String {
        match self {
            Self::Url(_) => "DATABASE_URL".to_string(),
            Self::Parts {
                user, name, host, ..
            } => format!("postgres://{}@{}/{}", user, host, name),
        }
    }
}

fn split_host_port(value: &str) -> Result<(&str, u16), ConfigError> {
    let invalid = |reason| ConfigError::InvalidHost {
        value: value.to_string(),
        reason,
    };

    match value.rsplit_once(':') {
        None => Ok((value, DEFAULT_DB_PORT)),
        Some((host, _)) if host.is_empty() => Err(invalid("missing host")),
        Some((host, port)) => {
            let port = port.parse().map_err(|_| invalid("port must be a number"))?;
            Ok((host, port))
        }
    }
}
