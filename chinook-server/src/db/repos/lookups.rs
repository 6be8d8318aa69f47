//! Lookup dimensions referenced by tracks

use crate::db::error::{CatalogError, QueryContext};
use crate::db::pool::CatalogPool;
use crate::models::{Genre, MediaType};

pub struct LookupRepo<'a> {
    pool: &'a CatalogPool,
}

impl<'a> LookupRepo<'a> {
    pub fn new(pool: &'a CatalogPool) -> Self {
        Self { pool }
    }

    pub async fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        const OP: &str = "getting genres";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Genre>("SELECT GenreId AS genre_id, Name AS name FROM genres")
            .fetch_all(&mut *conn)
            .await
            .op(OP)
    }

    pub async fn media_types(&self) -> Result<Vec<MediaType>, CatalogError> {
        const OP: &str = "getting media types";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, MediaType>(
            "SELECT MediaTypeId AS media_type_id, Name AS name FROM media_types",
        )
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }
}
