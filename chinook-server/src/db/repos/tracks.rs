//! Track repository - album and playlist projections
//!
//! UnitPrice is declared NUMERIC in the Chinook schema; it is cast to REAL
//! so it always decodes as `f64`.

use crate::db::error::{CatalogError, QueryContext};
use crate::db::pool::CatalogPool;
use crate::models::{AlbumTrack, PlaylistTrack};

pub struct TrackRepo<'a> {
    pool: &'a CatalogPool,
}

impl<'a> TrackRepo<'a> {
    pub fn new(pool: &'a CatalogPool) -> Self {
        Self { pool }
    }

    /// Tracks on one album with genre and media type names joined in.
    pub async fn by_album(&self, album_id: i64) -> Result<Vec<AlbumTrack>, CatalogError> {
        const OP: &str = "getting tracks by album";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, AlbumTrack>(
            r#"
            SELECT
                t.TrackId AS track_id,
                t.Name AS name,
                t.AlbumId AS album_id,
                t.MediaTypeId AS media_type_id,
                t.GenreId AS genre_id,
                t.Composer AS composer,
                t.Milliseconds AS milliseconds,
                t.Bytes AS bytes,
                CAST(t.UnitPrice AS REAL) AS unit_price,
                g.Name AS genre,
                m.Name AS media_type
            FROM tracks t
            LEFT JOIN genres g ON g.GenreId = t.GenreId
            LEFT JOIN media_types m ON m.MediaTypeId = t.MediaTypeId
            WHERE t.AlbumId = ?1
            "#,
        )
        .bind(album_id)
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }

    /// Tracks on one playlist, resolved through the `playlist_track` join table.
    pub async fn by_playlist(&self, playlist_id: i64) -> Result<Vec<PlaylistTrack>, CatalogError> {
        const OP: &str = "getting playlist tracks";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, PlaylistTrack>(
            r#"
            SELECT
                pt.PlaylistId AS playlist_id,
                t.TrackId AS track_id,
                t.Name AS name,
                al.Title AS album_title,
                ar.Name AS artist_name,
                g.Name AS genre,
                t.Composer AS composer,
                t.Milliseconds AS milliseconds,
                CAST(t.UnitPrice AS REAL) AS unit_price
            FROM playlist_track pt
            JOIN tracks t ON t.TrackId = pt.TrackId
            LEFT JOIN albums al ON al.AlbumId = t.AlbumId
            LEFT JOIN artists ar ON ar.ArtistId = al.ArtistId
            LEFT JOIN genres g ON g.GenreId = t.GenreId
            WHERE pt.PlaylistId = ?1
            "#,
        )
        .bind(playlist_id)
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }
}
