//! userctl-server binary
//!
//! Environment variables:
//!   DB_USER, DB_PASSWORD, DB_NAME     # required unless DATABASE_URL is set
//!   DB_HOST                           # host:port (default: localhost:5432)
//!   DATABASE_URL                      # full connection string override
//!   RUST_LOG                          # log filter (default: info)

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use userctl_server::config::{self, DatabaseConfig};
use userctl_server::{db, run_server, ServerConfig};

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Startup failures go through tracing as well as the process exit code.
fn log_fatal(err: &anyhow::Error) {
    tracing::error!("Fatal: {:#}", err);
}

async fn serve() -> Result<()> {
    let db_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let pool = db::open(&db_config)
        .await
        .context("Failed to connect to database")?;

    run_server(pool, ServerConfig::default())
        .await
        .context("Server error")
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = config::load_dotenv();
    init_tracing()?;

    match dotenv {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::info!("Using environment variables only (no .env file found)"),
    }

    if let Err(err) = serve().await {
        log_fatal(&err);
        return Err(err);
    }

    Ok(())
}
