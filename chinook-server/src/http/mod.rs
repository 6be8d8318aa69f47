//! HTTP dispatcher layer
//!
//! Axum server with:
//! - One handler per catalog route, ids parsed from the path
//! - Uniform `{"message": ...}` error bodies
//! - Request tracing, timeout, and panic recovery
//! - Graceful shutdown, including on a fatal health probe

pub mod error;
pub mod params;
pub mod routes;
pub mod server;
pub mod shutdown;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, HealthPolicy, ServerConfig, ServerError};
pub use shutdown::FatalSignal;
