//! API error type with IntoResponse
//!
//! Every error renders as `{"message": "..."}`.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::CatalogError;

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter failed to parse (400)
    InvalidParam { field: &'static str, reason: String },

    /// Customer body unreadable or incomplete (400, reason withheld)
    InvalidCustomer,

    /// Lookup missed and not-found mapping is enabled (404)
    NotFound(CatalogError),

    /// Any other catalog failure (500, logged)
    Catalog(CatalogError),

    /// Request outlived the configured timeout (500)
    Timeout(Duration),

    /// Handler panicked (500, detail logged only)
    Panicked,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidParam { field, reason } => {
                (StatusCode::BAD_REQUEST, format!("Invalid {}: {}", field, reason))
            }
            Self::InvalidCustomer => (StatusCode::BAD_REQUEST, "invalid customer".to_string()),
            Self::NotFound(e) => (StatusCode::NOT_FOUND, e.to_string()),
            Self::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            Self::Timeout(limit) => {
                tracing::error!("Request timed out after {:?}", limit);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("request timed out after {:?}", limit),
                )
            }
            Self::Panicked => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_param_is_400_with_field() {
        let err = ApiError::InvalidParam {
            field: "albumId",
            reason: "invalid digit found in string".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid albumId: invalid digit found in string");
    }

    #[tokio::test]
    async fn invalid_customer_is_generic() {
        let response = ApiError::InvalidCustomer.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "invalid customer");
    }

    #[tokio::test]
    async fn catalog_error_is_500_with_text() {
        let err = ApiError::Catalog(CatalogError::not_found("getting artist", "artist", 9));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "getting artist: artist 9 not found");
    }

    #[tokio::test]
    async fn timeout_is_500_with_limit() {
        let response = ApiError::Timeout(Duration::from_millis(100)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "request timed out after 100ms");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound(CatalogError::not_found("getting album", "album", 1));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
