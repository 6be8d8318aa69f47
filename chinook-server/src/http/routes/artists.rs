//! Artist endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::params::path_id;
use crate::http::server::AppState;
use crate::models::{Album, Artist};

/// GET /artists
async fn list_artists(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Artist>>, ApiError> {
    let artists = state.catalog.artists().await.map_err(|e| state.reject(e))?;
    Ok(Json(artists))
}

/// GET /artists/{artistId}
async fn get_artist(
    State(state): State<Arc<AppState>>,
    artist_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Artist>, ApiError> {
    let artist_id = path_id("artistId", artist_id)?;
    let artist = state
        .catalog
        .artist(artist_id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(artist))
}

/// GET /artists/{artistId}/albums - empty list for an artist without albums
async fn albums_by_artist(
    State(state): State<Arc<AppState>>,
    artist_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Album>>, ApiError> {
    let artist_id = path_id("artistId", artist_id)?;
    let albums = state
        .catalog
        .albums_by_artist(artist_id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(albums))
}

/// Artist routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/{artistId}", get(get_artist))
        .route("/artists/{artistId}/albums", get(albums_by_artist))
}
