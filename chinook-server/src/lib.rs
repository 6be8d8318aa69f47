//! chinook-server: HTTP catalog service for the Chinook music database
//!
//! Three layers, leaves first:
//! - `db`: query facade over SQLite plus the shared connection pool and
//!   its health diagnostics
//! - `models`: row projections and request payloads
//! - `http`: axum dispatcher mapping routes to facade calls and errors to
//!   status codes

pub mod db;
pub mod http;
pub mod models;

pub use db::{CatalogError, CatalogService, DatabaseConfig, HealthReport, HealthStatus, SqliteCatalog};
pub use http::{build_router, run_server, AppState, HealthPolicy, ServerConfig, ServerError};
