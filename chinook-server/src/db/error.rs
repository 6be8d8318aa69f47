//! Catalog error type

/// Errors raised by the connection service and the query facade.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The data-source locator could not be parsed.
    #[error("invalid database locator: {0}")]
    Config(#[source] sqlx::Error),

    /// The store rejected or failed a query.
    #[error("{op}: {source}")]
    Query {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A single-row lookup matched nothing.
    #[error("{op}: {resource} {id} not found")]
    NotFound {
        op: &'static str,
        resource: &'static str,
        id: i64,
    },

    #[error("database connection already closed")]
    AlreadyClosed,
}

impl CatalogError {
    pub fn not_found(op: &'static str, resource: &'static str, id: i64) -> Self {
        Self::NotFound { op, resource, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Attach an operation label to a store result.
pub trait QueryContext<T> {
    fn op(self, op: &'static str) -> Result<T, CatalogError>;
}

impl<T> QueryContext<T> for Result<T, sqlx::Error> {
    fn op(self, op: &'static str) -> Result<T, CatalogError> {
        self.map_err(|source| CatalogError::Query { op, source })
    }
}
