//! Customer record, keyed by its document.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored customer.
///
/// Created once and never mutated by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub document: String,
    #[sqlx(rename = "first_name")]
    pub firstname: String,
    #[sqlx(rename = "last_name")]
    pub lastname: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
