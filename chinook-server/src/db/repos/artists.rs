//! Artist repository

use crate::db::error::{CatalogError, QueryContext};
use crate::db::pool::CatalogPool;
use crate::models::Artist;

pub struct ArtistRepo<'a> {
    pool: &'a CatalogPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a CatalogPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Artist>, CatalogError> {
        const OP: &str = "getting artists";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Artist>(
            r#"
            SELECT ArtistId AS artist_id, Name AS name
            FROM artists
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }

    /// Get a single artist; a missing id is `CatalogError::NotFound`.
    pub async fn get(&self, artist_id: i64) -> Result<Artist, CatalogError> {
        const OP: &str = "getting artist";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Artist>(
            r#"
            SELECT ArtistId AS artist_id, Name AS name
            FROM artists
            WHERE ArtistId = ?1
            "#,
        )
        .bind(artist_id)
        .fetch_optional(&mut *conn)
        .await
        .op(OP)?
        .ok_or_else(|| CatalogError::not_found(OP, "artist", artist_id))
    }
}
