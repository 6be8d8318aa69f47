//! Dispatcher behaviour against an in-process fake catalog

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use chinook_server::db::PoolStats;
use chinook_server::models::{
    Album, AlbumTrack, Artist, Customer, Genre, Invoice, InvoiceDetail, MediaType, NewCustomer,
    Playlist, PlaylistTrack,
};
use chinook_server::{CatalogError, CatalogService, HealthReport, ServerConfig};

/// Counts every facade call; health reports the configured stats.
#[derive(Default)]
struct FakeCatalog {
    calls: AtomicUsize,
    stats: PoolStats,
    panic_on_genres: bool,
}

impl FakeCatalog {
    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn health(&self) -> HealthReport {
        HealthReport::up(self.stats)
    }

    async fn close(&self) -> Result<(), CatalogError> {
        Ok(())
    }

    async fn artists(&self) -> Result<Vec<Artist>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn artist(&self, artist_id: i64) -> Result<Artist, CatalogError> {
        self.hit();
        Ok(Artist {
            artist_id,
            name: Some("Fake".into()),
        })
    }

    async fn albums(&self) -> Result<Vec<Album>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn album(&self, album_id: i64) -> Result<Album, CatalogError> {
        self.hit();
        Err(CatalogError::not_found("getting album", "album", album_id))
    }

    async fn albums_by_artist(&self, _artist_id: i64) -> Result<Vec<Album>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn tracks_by_album(&self, _album_id: i64) -> Result<Vec<AlbumTrack>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn playlists(&self) -> Result<Vec<Playlist>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn playlist_tracks(&self, _playlist_id: i64) -> Result<Vec<PlaylistTrack>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        self.hit();
        if self.panic_on_genres {
            panic!("genre lookup exploded");
        }
        Ok(Vec::new())
    }

    async fn media_types(&self) -> Result<Vec<MediaType>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn customers(&self) -> Result<Vec<Customer>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn create_customer(&self, customer: NewCustomer) -> Result<Customer, CatalogError> {
        self.hit();
        Ok(Customer {
            customer_id: 60,
            first_name: customer.first_name,
            last_name: customer.last_name,
            company: customer.company,
            address: customer.address,
            city: customer.city,
            state: customer.state,
            country: customer.country,
            postal_code: customer.postal_code,
            phone: customer.phone,
            fax: customer.fax,
            email: customer.email,
            support_rep_id: customer.support_rep_id,
        })
    }

    async fn invoices_by_customer(&self, _customer_id: i64) -> Result<Vec<Invoice>, CatalogError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn invoice(&self, customer_id: i64, invoice_id: i64) -> Result<InvoiceDetail, CatalogError> {
        self.hit();
        Ok(InvoiceDetail {
            invoice: Invoice {
                invoice_id,
                customer_id,
                invoice_date: "2010-01-01 00:00:00".into(),
                billing_address: None,
                billing_city: None,
                billing_state: None,
                billing_country: None,
                billing_postal_code: None,
                total: 0.0,
            },
            lines: Vec::new(),
        })
    }
}

#[tokio::test]
async fn malformed_ids_never_reach_the_catalog() {
    let fake = Arc::new(FakeCatalog::default());
    let (app, _) = common::router_for(fake.clone(), &ServerConfig::default());

    for uri in [
        "/artists/NaN",
        "/artists/--1/albums",
        "/albums/0xZZ",
        "/albums/_/tracks",
        "/playlists/1e3",
        "/customers/abc/invoices",
        "/customers/abc/invoices/1",
        "/customers/1/invoices/abc",
    ] {
        let (status, _) = common::get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
    }

    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn non_utf8_ids_are_json_400_naming_the_field() {
    let fake = Arc::new(FakeCatalog::default());
    let (app, _) = common::router_for(fake.clone(), &ServerConfig::default());

    let cases = [
        ("/artists/%FF", "artistId"),
        ("/artists/%FF/albums", "artistId"),
        ("/albums/%C3%28", "albumId"),
        ("/albums/%FF/tracks", "albumId"),
        ("/playlists/%FF", "playlistId"),
        ("/customers/%FF/invoices", "customerId"),
        ("/customers/%FF/invoices/1", "customerId"),
        ("/customers/1/invoices/%FF", "invoiceId"),
    ];

    for (uri, field) in cases {
        // common::get panics on a non-JSON body
        let (status, body) = common::get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            body["message"],
            format!("Invalid {}: invalid UTF-8 in path segment", field),
            "{}",
            uri
        );
    }

    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn handler_panic_is_json_500() {
    let fake = Arc::new(FakeCatalog {
        panic_on_genres: true,
        ..FakeCatalog::default()
    });
    let (app, _) = common::router_for(fake.clone(), &ServerConfig::default());

    let (status, body) = common::get(&app, "/genres").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"message": "internal server error"}));

    // The router keeps serving after a panic
    let (status, _) = common::get(&app, "/artists").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_customer_body_never_reaches_the_catalog() {
    let fake = Arc::new(FakeCatalog::default());
    let (app, _) = common::router_for(fake.clone(), &ServerConfig::default());

    let (status, _) = common::post_json(&app, "/customers", "[]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn created_customer_is_echoed() {
    let fake = Arc::new(FakeCatalog::default());
    let (app, _) = common::router_for(fake.clone(), &ServerConfig::default());

    let (status, body) = common::post_json(
        &app,
        "/customers",
        r#"{"first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer_id"], 60);
    assert_eq!(body["company"], serde_json::Value::Null);
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn negative_and_signed_ids_are_passed_through() {
    let fake = Arc::new(FakeCatalog::default());
    let (app, _) = common::router_for(fake.clone(), &ServerConfig::default());

    let (status, body) = common::get(&app, "/artists/-5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["artist_id"], -5);

    let (_, body) = common::get(&app, "/customers/+0x10/invoices/0b11").await;
    assert_eq!(body["customer_id"], 16);
    assert_eq!(body["invoice_id"], 3);
}

#[tokio::test]
async fn heavy_load_surfaces_while_up() {
    let fake = Arc::new(FakeCatalog {
        stats: PoolStats {
            open_connections: 45,
            in_use: 45,
            ..PoolStats::default()
        },
        ..FakeCatalog::default()
    });
    let (app, _) = common::router_for(fake, &ServerConfig::default());

    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
    assert_eq!(body["message"], "The database is experiencing heavy load.");
    assert_eq!(body["open_connections"], 45);
}

#[tokio::test]
async fn not_found_maps_to_500_unless_enabled() {
    let fake = Arc::new(FakeCatalog::default());

    let (app, _) = common::router_for(fake.clone(), &ServerConfig::default());
    let (status, _) = common::get(&app, "/albums/9").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let config = ServerConfig {
        distinct_not_found: true,
        ..ServerConfig::default()
    };
    let (app, _) = common::router_for(fake, &config);
    let (status, body) = common::get(&app, "/albums/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "getting album: album 9 not found");
}
