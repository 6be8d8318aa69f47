//! Track projections joined with their lookup dimensions

use serde::Serialize;
use sqlx::FromRow;

/// Track row as listed for an album, with genre and media type names.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct AlbumTrack {
    pub track_id: i64,
    pub name: String,
    pub album_id: Option<i64>,
    pub media_type_id: i64,
    pub genre_id: Option<i64>,
    pub composer: Option<String>,
    pub milliseconds: i64,
    pub bytes: Option<i64>,
    pub unit_price: f64,
    pub genre: Option<String>,
    pub media_type: Option<String>,
}

/// Track row as listed for a playlist, resolved through `playlist_track`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PlaylistTrack {
    pub playlist_id: i64,
    pub track_id: i64,
    pub name: String,
    pub album_title: Option<String>,
    pub artist_name: Option<String>,
    pub genre: Option<String>,
    pub composer: Option<String>,
    pub milliseconds: i64,
    pub unit_price: f64,
}
