//! Route handlers organized by resource

use std::sync::Arc;

use axum::Router;

use super::server::AppState;

pub mod albums;
pub mod artists;
pub mod customers;
pub mod health;
pub mod lookups;
pub mod playlists;

/// All catalog routes, unlayered and awaiting state.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::router())
        .merge(artists::router())
        .merge(albums::router())
        .merge(playlists::router())
        .merge(lookups::router())
        .merge(customers::router())
}
