//! Customer rows and the create payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Column limits from the Chinook `customers` table.
const MAX_FIRST_NAME_LEN: usize = 40;
const MAX_LAST_NAME_LEN: usize = 20;
const MAX_EMAIL_LEN: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: String,
    pub support_rep_id: Option<i64>,
}

/// Body of `POST /customers`. The id is assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    pub email: String,
    #[serde(default)]
    pub support_rep_id: Option<i64>,
}

impl NewCustomer {
    /// Check required fields against the table's NOT NULL and length limits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("first_name", &self.first_name, MAX_FIRST_NAME_LEN)?;
        required("last_name", &self.last_name, MAX_LAST_NAME_LEN)?;
        required("email", &self.email, MAX_EMAIL_LEN)?;
        Ok(())
    }
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
