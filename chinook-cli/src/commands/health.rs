//! One-shot health probe

use anyhow::{bail, Context, Result};
use chinook_server::{CatalogService, SqliteCatalog};
use clap::Parser;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct HealthArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Probe the database, print the report, and fail when it is down.
pub async fn run_health(args: HealthArgs) -> Result<()> {
    let catalog = SqliteCatalog::open(&args.database.to_config())
        .context("Invalid SQLITE_DB_URL; set via --database-url, SQLITE_DB_URL env, or .env")?;

    let report = catalog.health().await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Err(e) = catalog.close().await {
        tracing::warn!("Closing catalog: {}", e);
    }

    if !report.is_up() {
        bail!(report.error.unwrap_or_else(|| "db down".to_string()));
    }
    Ok(())
}
