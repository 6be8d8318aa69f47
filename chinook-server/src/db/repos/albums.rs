//! Album repository

use crate::db::error::{CatalogError, QueryContext};
use crate::db::pool::CatalogPool;
use crate::models::Album;

pub struct AlbumRepo<'a> {
    pool: &'a CatalogPool,
}

impl<'a> AlbumRepo<'a> {
    pub fn new(pool: &'a CatalogPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Album>, CatalogError> {
        const OP: &str = "getting albums";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Album>(
            r#"
            SELECT AlbumId AS album_id, Title AS title, ArtistId AS artist_id
            FROM albums
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }

    pub async fn get(&self, album_id: i64) -> Result<Album, CatalogError> {
        const OP: &str = "getting album";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Album>(
            r#"
            SELECT AlbumId AS album_id, Title AS title, ArtistId AS artist_id
            FROM albums
            WHERE AlbumId = ?1
            "#,
        )
        .bind(album_id)
        .fetch_optional(&mut *conn)
        .await
        .op(OP)?
        .ok_or_else(|| CatalogError::not_found(OP, "album", album_id))
    }

    /// Albums for one artist. An unknown artist yields an empty list.
    pub async fn by_artist(&self, artist_id: i64) -> Result<Vec<Album>, CatalogError> {
        const OP: &str = "getting albums by artist";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Album>(
            r#"
            SELECT AlbumId AS album_id, Title AS title, ArtistId AS artist_id
            FROM albums
            WHERE ArtistId = ?1
            "#,
        )
        .bind(artist_id)
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }
}
