//! Playlist repository

use crate::db::error::{CatalogError, QueryContext};
use crate::db::pool::CatalogPool;
use crate::models::Playlist;

pub struct PlaylistRepo<'a> {
    pool: &'a CatalogPool,
}

impl<'a> PlaylistRepo<'a> {
    pub fn new(pool: &'a CatalogPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Playlist>, CatalogError> {
        const OP: &str = "getting playlists";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Playlist>(
            r#"
            SELECT PlaylistId AS playlist_id, Name AS name
            FROM playlists
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }
}
