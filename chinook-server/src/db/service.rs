//! Catalog service trait - the seam between dispatcher and storage

use async_trait::async_trait;

use super::error::CatalogError;
use super::health::HealthReport;
use crate::models::{
    Album, AlbumTrack, Artist, Customer, Genre, Invoice, InvoiceDetail, MediaType, NewCustomer,
    Playlist, PlaylistTrack,
};

/// One method per catalog access pattern, plus lifecycle and health.
///
/// Handlers hold an `Arc<dyn CatalogService>`; `SqliteCatalog` is the
/// production implementation.
#[async_trait]
pub trait CatalogService: Send + Sync + 'static {
    /// Probe the store and report pool diagnostics.
    async fn health(&self) -> HealthReport;

    /// Close the shared handle. A second call returns `CatalogError::AlreadyClosed`.
    async fn close(&self) -> Result<(), CatalogError>;

    async fn artists(&self) -> Result<Vec<Artist>, CatalogError>;

    async fn artist(&self, artist_id: i64) -> Result<Artist, CatalogError>;

    async fn albums(&self) -> Result<Vec<Album>, CatalogError>;

    async fn album(&self, album_id: i64) -> Result<Album, CatalogError>;

    async fn albums_by_artist(&self, artist_id: i64) -> Result<Vec<Album>, CatalogError>;

    async fn tracks_by_album(&self, album_id: i64) -> Result<Vec<AlbumTrack>, CatalogError>;

    async fn playlists(&self) -> Result<Vec<Playlist>, CatalogError>;

    async fn playlist_tracks(&self, playlist_id: i64) -> Result<Vec<PlaylistTrack>, CatalogError>;

    async fn genres(&self) -> Result<Vec<Genre>, CatalogError>;

    async fn media_types(&self) -> Result<Vec<MediaType>, CatalogError>;

    async fn customers(&self) -> Result<Vec<Customer>, CatalogError>;

    async fn create_customer(&self, customer: NewCustomer) -> Result<Customer, CatalogError>;

    async fn invoices_by_customer(&self, customer_id: i64) -> Result<Vec<Invoice>, CatalogError>;

    async fn invoice(&self, customer_id: i64, invoice_id: i64) -> Result<InvoiceDetail, CatalogError>;
}
