//! Catalog dimensions: artists, albums, playlists, genres, media types

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Artist {
    pub artist_id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Album {
    pub album_id: i64,
    pub title: String,
    pub artist_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Playlist {
    pub playlist_id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Genre {
    pub genre_id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct MediaType {
    pub media_type_id: i64,
    pub name: Option<String>,
}
