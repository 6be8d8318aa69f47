//! Genre and media type endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Genre, MediaType};

/// GET /genres
async fn list_genres(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Genre>>, ApiError> {
    let genres = state.catalog.genres().await.map_err(|e| state.reject(e))?;
    Ok(Json(genres))
}

/// GET /mediatypes
async fn list_media_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MediaType>>, ApiError> {
    let media_types = state.catalog.media_types().await.map_err(|e| state.reject(e))?;
    Ok(Json(media_types))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/mediatypes", get(list_media_types))
}
