//! chinook CLI - serve the Chinook music catalog over HTTP
//!
//! Subcommands:
//! - `serve`: run the HTTP catalog service
//! - `health`: probe the database once and print the pool report

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "chinook",
    author,
    version,
    about = "HTTP catalog service for the Chinook music database",
    long_about = "Serve artists, albums, tracks, playlists, customers, and invoices from a \
                  Chinook SQLite database as JSON, with pool health diagnostics."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP catalog service
    Serve(commands::serve::ServeArgs),

    /// Probe the database once and print the health report as JSON
    Health(commands::health::HealthArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be populated
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Health(args) => commands::run_health(args).await?,
    }
    Ok(())
}
