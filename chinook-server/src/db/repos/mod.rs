//! Repository implementations for catalog access
//!
//! Each repository borrows the shared `CatalogPool` and follows these patterns:
//! - One statement per access pattern, parameters bound positionally
//! - Projections JOIN their lookup tables (no N+1)
//! - No ORDER BY: rows come back in the store's natural order
//! - Store errors carry the operation label of the calling method

pub mod albums;
pub mod artists;
pub mod customers;
pub mod invoices;
pub mod lookups;
pub mod playlists;
pub mod tracks;

pub use albums::AlbumRepo;
pub use artists::ArtistRepo;
pub use customers::CustomerRepo;
pub use invoices::InvoiceRepo;
pub use lookups::LookupRepo;
pub use playlists::PlaylistRepo;
pub use tracks::TrackRepo;
