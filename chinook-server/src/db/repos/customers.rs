//! Customer repository - the only write path
//!
//! create: INSERT ... RETURNING, so the generated id comes back in one round trip

use crate::db::error::{CatalogError, QueryContext};
use crate::db::pool::CatalogPool;
use crate::models::{Customer, NewCustomer};

pub struct CustomerRepo<'a> {
    pool: &'a CatalogPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a CatalogPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, CatalogError> {
        const OP: &str = "getting customers";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Customer>(
            r#"
            SELECT
                CustomerId AS customer_id,
                FirstName AS first_name,
                LastName AS last_name,
                Company AS company,
                Address AS address,
                City AS city,
                State AS state,
                Country AS country,
                PostalCode AS postal_code,
                Phone AS phone,
                Fax AS fax,
                Email AS email,
                SupportRepId AS support_rep_id
            FROM customers
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .op(OP)
    }

    /// Insert a customer and return the stored row, including its new id.
    ///
    /// Foreign-key and NOT NULL violations surface as query errors.
    pub async fn create(&self, customer: NewCustomer) -> Result<Customer, CatalogError> {
        const OP: &str = "creating customer";
        let mut conn = self.pool.acquire().await.op(OP)?;

        sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (
                FirstName, LastName, Company, Address, City, State,
                Country, PostalCode, Phone, Fax, Email, SupportRepId
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            RETURNING
                CustomerId AS customer_id,
                FirstName AS first_name,
                LastName AS last_name,
                Company AS company,
                Address AS address,
                City AS city,
                State AS state,
                Country AS country,
                PostalCode AS postal_code,
                Phone AS phone,
                Fax AS fax,
                Email AS email,
                SupportRepId AS support_rep_id
            "#,
        )
        .bind(customer.first_name)
        .bind(customer.last_name)
        .bind(customer.company)
        .bind(customer.address)
        .bind(customer.city)
        .bind(customer.state)
        .bind(customer.country)
        .bind(customer.postal_code)
        .bind(customer.phone)
        .bind(customer.fax)
        .bind(customer.email)
        .bind(customer.support_rep_id)
        .fetch_one(&mut *conn)
        .await
        .op(OP)
    }
}
