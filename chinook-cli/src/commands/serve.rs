//! HTTP server command for the catalog API

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chinook_server::{run_server, HealthPolicy, ServerConfig, SqliteCatalog};
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[arg(long, short = 'b', env = "CHINOOK_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Per-request timeout in seconds
    #[arg(long, env = "CHINOOK_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,

    /// Shut down with an error when a health probe finds the database down
    #[arg(long)]
    pub health_fail_fast: bool,

    /// Answer 404 instead of 500 when a single-row lookup misses
    #[arg(long)]
    pub distinct_not_found: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.request_timeout),
            health_policy: if self.health_fail_fast {
                HealthPolicy::FailFast
            } else {
                HealthPolicy::Report
            },
            distinct_not_found: self.distinct_not_found,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let catalog = SqliteCatalog::open(&args.database.to_config())
        .context("Invalid SQLITE_DB_URL; set via --database-url, SQLITE_DB_URL env, or .env")?;

    tracing::info!("Starting chinook server on {}", args.bind);

    // Run server (blocks until shutdown)
    run_server(Arc::new(catalog), args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
