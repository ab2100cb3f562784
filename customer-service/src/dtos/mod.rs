pub mod customer;

pub use customer::{CreateCustomerRequest, CreateCustomerResponse, CustomerResponse};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body produced by `AppError`, documented for the OpenAPI schema.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Customer not found: 123")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
