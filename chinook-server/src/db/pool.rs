//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. Idle-timeout and
//! max-lifetime eviction run in the `before_acquire` hook instead of the
//! sqlx reaper so every eviction is counted.

use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};

use super::error::CatalogError;
use super::stats::{PoolMetrics, PoolStats};

/// Locator used when `SQLITE_DB_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://chinook.db";

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(10 * 60);
pub const DEFAULT_MAX_LIFETIME: Duration = Duration::from_secs(30 * 60);

/// Connection settings for the catalog store
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `sqlite:` locator, e.g. `sqlite://chinook.db?mode=ro`
    pub url: String,
    pub max_connections: u32,
    /// Connections idle longer than this are closed on next checkout
    pub idle_timeout: Option<Duration>,
    /// Connections older than this are closed on next checkout
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("SQLITE_DB_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            idle_timeout: Some(DEFAULT_IDLE_TIMEOUT),
            max_lifetime: Some(DEFAULT_MAX_LIFETIME),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Eviction {
    Idle,
    Lifetime,
}

fn eviction(
    age: Duration,
    idle_for: Duration,
    idle_timeout: Option<Duration>,
    max_lifetime: Option<Duration>,
) -> Option<Eviction> {
    if max_lifetime.is_some_and(|max| age >= max) {
        return Some(Eviction::Lifetime);
    }
    if idle_timeout.is_some_and(|max| idle_for >= max) {
        return Some(Eviction::Idle);
    }
    None
}

/// Shared pool handle with its metrics.
#[derive(Debug, Clone)]
pub struct CatalogPool {
    pool: SqlitePool,
    metrics: Arc<PoolMetrics>,
    max_connections: u32,
}

impl CatalogPool {
    /// Build a lazy pool for the configured locator.
    ///
    /// No connection is opened until the first query or probe.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` if the locator cannot be parsed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let pool = CatalogPool::connect_lazy(&DatabaseConfig::default())?;
    /// ```
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, CatalogError> {
        let options = SqliteConnectOptions::from_str(&config.url).map_err(CatalogError::Config)?;

        let metrics = Arc::new(PoolMetrics::default());
        let hook_metrics = Arc::clone(&metrics);
        let idle_timeout = config.idle_timeout;
        let max_lifetime = config.max_lifetime;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .idle_timeout(None)
            .max_lifetime(None)
            .before_acquire(move |_conn, meta| {
                let keep = match eviction(meta.age, meta.idle_for, idle_timeout, max_lifetime) {
                    Some(Eviction::Lifetime) => {
                        hook_metrics.record_lifetime_closed();
                        false
                    }
                    Some(Eviction::Idle) => {
                        hook_metrics.record_idle_closed();
                        false
                    }
                    None => true,
                };
                Box::pin(async move { Ok(keep) })
            })
            .connect_lazy_with(options);

        Ok(Self {
            pool,
            metrics,
            max_connections: config.max_connections,
        })
    }

    /// Check out a connection.
    ///
    /// The acquisition counts as a wait when every connection the pool may
    /// open was already checked out by another caller.
    pub async fn acquire(&self) -> Result<CatalogConn, sqlx::Error> {
        let saturated = self.metrics.checked_out() >= self.max_connections;
        let started = Instant::now();
        let conn = self.pool.acquire().await?;
        if saturated {
            self.metrics.record_wait(started.elapsed());
        }
        Ok(CatalogConn {
            conn,
            _lease: Lease::new(Arc::clone(&self.metrics)),
        })
    }

    pub fn stats(&self) -> PoolStats {
        self.metrics.snapshot(self.pool.size())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Underlying sqlx pool, for tooling that needs raw access.
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Marks one connection as in use until dropped.
#[derive(Debug)]
struct Lease(Arc<PoolMetrics>);

impl Lease {
    fn new(metrics: Arc<PoolMetrics>) -> Self {
        metrics.record_checkout();
        Self(metrics)
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        self.0.record_checkin();
    }
}

/// A checked-out connection. Dropping it returns the connection to the pool.
#[derive(Debug)]
pub struct CatalogConn {
    conn: PoolConnection<Sqlite>,
    _lease: Lease,
}

impl Deref for CatalogConn {
    type Target = SqliteConnection;

    fn deref(&self) -> &SqliteConnection {
        &self.conn
    }
}

impl DerefMut for CatalogConn {
    fn deref_mut(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}
