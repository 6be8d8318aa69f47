//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing, request timeout, and panic recovery middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C or a fatal health probe

use std::any::Any as PanicPayload;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use super::shutdown::{shutdown_signal, FatalSignal};
use crate::db::{CatalogError, CatalogService};

/// What a failed health probe does beyond reporting `down`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HealthPolicy {
    /// Report and keep serving.
    #[default]
    Report,
    /// Report, then shut the server down and exit with an error.
    FailFast,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,

    /// Upper bound on a single request, query time included
    pub request_timeout: Duration,

    pub health_policy: HealthPolicy,

    /// Map lookup misses to 404 instead of 500
    pub distinct_not_found: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_permissive: false,
            request_timeout: Duration::from_secs(30),
            health_policy: HealthPolicy::Report,
            distinct_not_found: false,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub health_policy: HealthPolicy,
    pub distinct_not_found: bool,
    pub fatal: FatalSignal,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>, config: &ServerConfig) -> Self {
        Self {
            catalog,
            health_policy: config.health_policy,
            distinct_not_found: config.distinct_not_found,
            fatal: FatalSignal::new(),
        }
    }

    /// Translate a catalog error into the response error for this server.
    pub fn reject(&self, err: CatalogError) -> ApiError {
        if self.distinct_not_found && err.is_not_found() {
            ApiError::NotFound(err)
        } else {
            ApiError::Catalog(err)
        }
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        let port = config.bind_addr.port();
        let origins: Vec<HeaderValue> = [
            format!("http://localhost:{}", port),
            format!("http://127.0.0.1:{}", port),
        ]
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    routes::router()
        .layer(middleware::from_fn_with_state(
            config.request_timeout,
            enforce_timeout,
        ))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bound a request by the configured timeout, dropping the handler future on expiry.
async fn enforce_timeout(State(limit): State<Duration>, request: Request, next: Next) -> Response {
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError::Timeout(limit).into_response(),
    }
}

fn panic_response(panic: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(detail, "Handler panicked");
    ApiError::Panicked.into_response()
}

/// Run the HTTP server until a shutdown signal, then close the catalog.
///
/// # Errors
///
/// `ServerError::Unhealthy` when the server stopped because a health probe
/// failed under `HealthPolicy::FailFast`.
///
/// # Example
///
/// ```ignore
/// let catalog = SqliteCatalog::open(&DatabaseConfig::default())?;
/// run_server(Arc::new(catalog), ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    catalog: Arc<dyn CatalogService>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let state = Arc::new(AppState::new(Arc::clone(&catalog), &config));
    let fatal = state.fatal.clone();
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(fatal.clone()))
        .await?;

    if let Err(e) = catalog.close().await {
        tracing::warn!("Closing catalog: {}", e);
    }
    tracing::info!("Server shutdown complete");

    match fatal.reason() {
        Some(reason) => Err(ServerError::Unhealthy(reason)),
        None => Ok(()),
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stopped after failed health probe: {0}")]
    Unhealthy(String),
}
