//! Database layer - connection service and query facade
//!
//! # Design Principles
//!
//! - One pool per process, shared by reference - no global handle
//! - Every acquisition goes through `CatalogPool::acquire` so wait metrics stay honest
//! - Projections use JOINs - no N+1 queries
//! - Store errors are wrapped with an operation label and propagated, never retried

pub mod catalog;
pub mod error;
pub mod health;
pub mod pool;
pub mod repos;
pub mod service;
pub mod stats;

pub use catalog::SqliteCatalog;
pub use error::CatalogError;
pub use health::{HealthReport, HealthStatus, HEALTH_PROBE_TIMEOUT};
pub use pool::{
    CatalogConn, CatalogPool, DatabaseConfig, DEFAULT_DATABASE_URL, DEFAULT_IDLE_TIMEOUT,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_LIFETIME,
};
pub use service::CatalogService;
pub use stats::{PoolMetrics, PoolStats};
