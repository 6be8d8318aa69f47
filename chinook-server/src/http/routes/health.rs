//! Health check and root greeting

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::HealthReport;
use crate::http::server::{AppState, HealthPolicy};

#[derive(Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// GET /
async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World",
    })
}

/// GET /health - 200 when up, 503 when down
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthReport>) {
    let report = state.catalog.health().await;
    if report.is_up() {
        return (StatusCode::OK, Json(report));
    }

    let reason = report.error.clone().unwrap_or_else(|| "db down".to_string());
    tracing::error!(%reason, "Database health probe failed");
    if state.health_policy == HealthPolicy::FailFast {
        state.fatal.trigger(reason);
    }

    (StatusCode::SERVICE_UNAVAILABLE, Json(report))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
}
