//! Command implementations for the chinook CLI

use std::time::Duration;

use chinook_server::db::{
    DEFAULT_DATABASE_URL, DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_LIFETIME,
};
use chinook_server::DatabaseConfig;
use clap::Args;

pub mod health;
pub mod serve;

pub use health::run_health;
pub use serve::run_serve;

/// Database connection flags shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// SQLite locator, e.g. sqlite://chinook.db
    #[arg(long, env = "SQLITE_DB_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Close connections idle longer than this many seconds (0 disables)
    #[arg(long, default_value_t = DEFAULT_IDLE_TIMEOUT.as_secs())]
    pub idle_timeout: u64,

    /// Close connections older than this many seconds (0 disables)
    #[arg(long, default_value_t = DEFAULT_MAX_LIFETIME.as_secs())]
    pub max_lifetime: u64,
}

impl DatabaseArgs {
    pub fn to_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            max_connections: self.max_connections,
            idle_timeout: seconds(self.idle_timeout),
            max_lifetime: seconds(self.max_lifetime),
        }
    }
}

fn seconds(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
