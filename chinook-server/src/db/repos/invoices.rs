//! Invoice repository
//!
//! detail: header and lines are read on the same pooled connection, the
//! header scoped to its customer so ids from another account miss.

use crate::db::error::{CatalogError, QueryContext};
use crate::db::pool::CatalogPool;
use crate::models::{Invoice, InvoiceDetail, InvoiceLine};

pub struct InvoiceRepo<'a> {
    pool: &'a CatalogPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a CatalogPool) -> Self {
        Self { pool }
    }

    pub async fn by_customer(&self, customer_id: i64) -> Result<Vec<Invoice>, CatalogError> {
        const OP: &str = "getting invoices by customer";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Invoice>(
            r#"
            SELECT
                InvoiceId AS invoice_id,
                CustomerId AS customer_id,
                CAST(InvoiceDate AS TEXT) AS invoice_date,
                BillingAddress AS billing_address,
                BillingCity AS billing_city,
                BillingState AS billing_state,
                BillingCountry AS billing_country,
                BillingPostalCode AS billing_postal_code,
                CAST(Total AS REAL) AS total
            FROM invoices
            WHERE CustomerId = ?1
            "#,
        )
        .bind(customer_id)
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }

    pub async fn detail(
        &self,
        customer_id: i64,
        invoice_id: i64,
    ) -> Result<InvoiceDetail, CatalogError> {
        const OP: &str = "getting invoice";
        let mut conn = self.pool.acquire().await.op(OP)?;

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT
                InvoiceId AS invoice_id,
                CustomerId AS customer_id,
                CAST(InvoiceDate AS TEXT) AS invoice_date,
                BillingAddress AS billing_address,
                BillingCity AS billing_city,
                BillingState AS billing_state,
                BillingCountry AS billing_country,
                BillingPostalCode AS billing_postal_code,
                CAST(Total AS REAL) AS total
            FROM invoices
            WHERE CustomerId = ?1 AND InvoiceId = ?2
            "#,
        )
        .bind(customer_id)
        .bind(invoice_id)
        .fetch_optional(&mut *conn)
        .await
        .op(OP)?
        .ok_or_else(|| CatalogError::not_found(OP, "invoice", invoice_id))?;

        let lines = sqlx::query_as::<_, InvoiceLine>(
            r#"
            SELECT
                ii.InvoiceLineId AS invoice_line_id,
                ii.TrackId AS track_id,
                t.Name AS track_name,
                al.Title AS album_title,
                ar.Name AS artist_name,
                CAST(ii.UnitPrice AS REAL) AS unit_price,
                ii.Quantity AS quantity
            FROM invoice_items ii
            JOIN tracks t ON t.TrackId = ii.TrackId
            LEFT JOIN albums al ON al.AlbumId = t.AlbumId
            LEFT JOIN artists ar ON ar.ArtistId = al.ArtistId
            WHERE ii.InvoiceId = ?1
            "#,
        )
        .bind(invoice_id)
        .fetch_all(&mut *conn)
        .await
        .op(OP)?;

        Ok(InvoiceDetail { invoice, lines })
    }
}
