//! Invoices and their line items

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Invoice {
    pub invoice_id: i64,
    pub customer_id: i64,
    pub invoice_date: String,
    pub billing_address: Option<String>,
    pub billing_city: Option<String>,
    pub billing_state: Option<String>,
    pub billing_country: Option<String>,
    pub billing_postal_code: Option<String>,
    pub total: f64,
}

/// One purchased track on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct InvoiceLine {
    pub invoice_line_id: i64,
    pub track_id: i64,
    pub track_name: String,
    pub album_title: Option<String>,
    pub artist_name: Option<String>,
    pub unit_price: f64,
    pub quantity: i64,
}

/// Invoice header with its lines, serialized as one flat object plus `lines`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub lines: Vec<InvoiceLine>,
}
