//! Album endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::params::path_id;
use crate::http::server::AppState;
use crate::models::{Album, AlbumTrack};

/// GET /albums
async fn list_albums(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state.catalog.albums().await.map_err(|e| state.reject(e))?;
    Ok(Json(albums))
}

/// GET /albums/{albumId}
async fn get_album(
    State(state): State<Arc<AppState>>,
    album_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Album>, ApiError> {
    let album_id = path_id("albumId", album_id)?;
    let album = state
        .catalog
        .album(album_id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(album))
}

/// GET /albums/{albumId}/tracks
async fn tracks_by_album(
    State(state): State<Arc<AppState>>,
    album_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<AlbumTrack>>, ApiError> {
    let album_id = path_id("albumId", album_id)?;
    let tracks = state
        .catalog
        .tracks_by_album(album_id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(tracks))
}

/// Album routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/albums", get(list_albums))
        .route("/albums/{albumId}", get(get_album))
        .route("/albums/{albumId}/tracks", get(tracks_by_album))
}
