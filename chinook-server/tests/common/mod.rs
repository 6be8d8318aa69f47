//! Shared fixtures: a seeded Chinook database in a temporary directory

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use chinook_server::{build_router, AppState, CatalogService, DatabaseConfig, ServerConfig, SqliteCatalog};
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot

const SCHEMA: &str = include_str!("../fixtures/chinook.sql");

/// Seeded catalog; the database file lives as long as `_dir`.
pub struct Fixture {
    pub catalog: Arc<SqliteCatalog>,
    _dir: TempDir,
}

pub fn database_config(dir: &TempDir) -> DatabaseConfig {
    let path = dir.path().join("chinook.db");
    DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        ..DatabaseConfig::default()
    }
}

pub async fn seeded() -> Fixture {
    seeded_with(|_| {}).await
}

pub async fn seeded_with(tweak: impl FnOnce(&mut DatabaseConfig)) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = database_config(&dir);
    tweak(&mut config);

    let catalog = SqliteCatalog::open(&config).expect("catalog open failed");
    sqlx::raw_sql(SCHEMA)
        .execute(catalog.pool().inner())
        .await
        .expect("seeding schema failed");

    Fixture {
        catalog: Arc::new(catalog),
        _dir: dir,
    }
}

pub fn router_for(catalog: Arc<dyn CatalogService>, config: &ServerConfig) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(catalog, config));
    (build_router(Arc::clone(&state), config), state)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

pub async fn post_json(app: &Router, uri: &str, body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "non-JSON body (status={}): {} ({})",
            status,
            String::from_utf8_lossy(&bytes),
            e
        )
    });
    (status, json)
}
