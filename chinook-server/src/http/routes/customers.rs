//! Customer and invoice endpoints
//!
//! No authorization is applied to any of these routes.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::params::{path_id, path_ids};
use crate::http::server::AppState;
use crate::models::{Customer, Invoice, InvoiceDetail, NewCustomer};

/// GET /customers
async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.catalog.customers().await.map_err(|e| state.reject(e))?;
    Ok(Json(customers))
}

/// POST /customers - body problems are logged but never echoed
async fn create_customer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewCustomer>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Json(customer) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected customer body");
        ApiError::InvalidCustomer
    })?;
    customer.validate().map_err(|e| {
        tracing::debug!(error = %e, "Rejected customer body");
        ApiError::InvalidCustomer
    })?;

    let created = state
        .catalog
        .create_customer(customer)
        .await
        .map_err(|e| state.reject(e))?;
    tracing::info!(customer_id = created.customer_id, "Customer created");
    Ok(Json(created))
}

/// GET /customers/{customerId}/invoices
async fn invoices_by_customer(
    State(state): State<Arc<AppState>>,
    customer_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    let customer_id = path_id("customerId", customer_id)?;
    let invoices = state
        .catalog
        .invoices_by_customer(customer_id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(invoices))
}

/// GET /customers/{customerId}/invoices/{invoiceId}
async fn invoice_detail(
    State(state): State<Arc<AppState>>,
    ids: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<InvoiceDetail>, ApiError> {
    let (customer_id, invoice_id) = path_ids(["customerId", "invoiceId"], ids)?;
    let invoice = state
        .catalog
        .invoice(customer_id, invoice_id)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(invoice))
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/{customerId}/invoices", get(invoices_by_customer))
        .route(
            "/customers/{customerId}/invoices/{invoiceId}",
            get(invoice_detail),
        )
}
