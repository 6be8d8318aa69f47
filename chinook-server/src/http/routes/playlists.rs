//! Playlist endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::params::path_id;
use crate::http::server::AppState;
use crate::models::{Playlist, PlaylistTrack};

/// GET /playlists
async fn list_playlists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Playlist>>, ApiError> {
    let playlists = state.catalog.playlists().await.map_err(|e| state.reject(e))?;
    Ok(Json(playlists))
}

/// GET /playlists/{playlistId} - the playlist's tracks
async fn playlist_tracks(
    State(state): State<Arc<AppState>>,
    playlist_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<PlaylistTrack>>, ApiError> {
    let playlist_id = path_id("playlistId", playlist_id)?;
    let tracks = state
        .catalog
        .playlist_tracks(playlist_id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(tracks))
}

/// Playlist routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/playlists", get(list_playlists))
        .route("/playlists/{playlistId}", get(playlist_tracks))
}
