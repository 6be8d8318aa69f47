//! SQLite-backed catalog service

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use sqlx::Connection;
use tracing::{debug, info};

use super::error::CatalogError;
use super::health::{HealthReport, HEALTH_PROBE_TIMEOUT};
use super::pool::{CatalogPool, DatabaseConfig};
use super::repos::{
    AlbumRepo, ArtistRepo, CustomerRepo, InvoiceRepo, LookupRepo, PlaylistRepo, TrackRepo,
};
use super::service::CatalogService;
use crate::models::{
    Album, AlbumTrack, Artist, Customer, Genre, Invoice, InvoiceDetail, MediaType, NewCustomer,
    Playlist, PlaylistTrack,
};

/// Owns the process-wide pool. Construct once at startup and share behind an `Arc`.
#[derive(Debug)]
pub struct SqliteCatalog {
    pool: CatalogPool,
    locator: String,
    closed: AtomicBool,
}

impl SqliteCatalog {
    /// Open the catalog without dialing the store.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` when the locator is malformed. Callers
    /// should treat that as fatal configuration, not a runtime condition.
    pub fn open(config: &DatabaseConfig) -> Result<Self, CatalogError> {
        let pool = CatalogPool::connect_lazy(config)?;
        debug!(locator = %config.url, max_connections = config.max_connections, "catalog pool created");
        Ok(Self {
            pool,
            locator: config.url.clone(),
            closed: AtomicBool::new(false),
        })
    }

    pub fn pool(&self) -> &CatalogPool {
        &self.pool
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }
}

#[async_trait]
impl CatalogService for SqliteCatalog {
    async fn health(&self) -> HealthReport {
        match tokio::time::timeout(HEALTH_PROBE_TIMEOUT, self.ping()).await {
            Ok(Ok(())) => HealthReport::up(self.pool.stats()),
            Ok(Err(e)) => HealthReport::down(e),
            Err(_) => HealthReport::down(format_args!(
                "ping timed out after {:?}",
                HEALTH_PROBE_TIMEOUT
            )),
        }
    }

    async fn close(&self) -> Result<(), CatalogError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err(CatalogError::AlreadyClosed);
        }
        info!(locator = %self.locator, "Disconnected from database");
        self.pool.close().await;
        Ok(())
    }

    async fn artists(&self) -> Result<Vec<Artist>, CatalogError> {
        ArtistRepo::new(&self.pool).list().await
    }

    async fn artist(&self, artist_id: i64) -> Result<Artist, CatalogError> {
        ArtistRepo::new(&self.pool).get(artist_id).await
    }

    async fn albums(&self) -> Result<Vec<Album>, CatalogError> {
        AlbumRepo::new(&self.pool).list().await
    }

    async fn album(&self, album_id: i64) -> Result<Album, CatalogError> {
        AlbumRepo::new(&self.pool).get(album_id).await
    }

    async fn albums_by_artist(&self, artist_id: i64) -> Result<Vec<Album>, CatalogError> {
        AlbumRepo::new(&self.pool).by_artist(artist_id).await
    }

    async fn tracks_by_album(&self, album_id: i64) -> Result<Vec<AlbumTrack>, CatalogError> {
        TrackRepo::new(&self.pool).by_album(album_id).await
    }

    async fn playlists(&self) -> Result<Vec<Playlist>, CatalogError> {
        PlaylistRepo::new(&self.pool).list().await
    }

    async fn playlist_tracks(&self, playlist_id: i64) -> Result<Vec<PlaylistTrack>, CatalogError> {
        TrackRepo::new(&self.pool).by_playlist(playlist_id).await
    }

    async fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        LookupRepo::new(&self.pool).genres().await
    }

    async fn media_types(&self) -> Result<Vec<MediaType>, CatalogError> {
        LookupRepo::new(&self.pool).media_types().await
    }

    async fn customers(&self) -> Result<Vec<Customer>, CatalogError> {
        CustomerRepo::new(&self.pool).list().await
    }

    async fn create_customer(&self, customer: NewCustomer) -> Result<Customer, CatalogError> {
        CustomerRepo::new(&self.pool).create(customer).await
    }

    async fn invoices_by_customer(&self, customer_id: i64) -> Result<Vec<Invoice>, CatalogError> {
        InvoiceRepo::new(&self.pool).by_customer(customer_id).await
    }

    async fn invoice(&self, customer_id: i64, invoice_id: i64) -> Result<InvoiceDetail, CatalogError> {
        InvoiceRepo::new(&self.pool).detail(customer_id, invoice_id).await
    }
}
