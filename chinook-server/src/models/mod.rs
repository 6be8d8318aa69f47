//! Catalog row projections and request payloads
//!
//! Row types derive `FromRow` with snake_case fields; queries alias the
//! store's PascalCase columns to match.

pub mod catalog;
pub mod customer;
pub mod invoice;
pub mod track;
pub mod validation;

pub use catalog::{Album, Artist, Genre, MediaType, Playlist};
pub use customer::{Customer, NewCustomer};
pub use invoice::{Invoice, InvoiceDetail, InvoiceLine};
pub use track::{AlbumTrack, PlaylistTrack};
pub use validation::ValidationError;
