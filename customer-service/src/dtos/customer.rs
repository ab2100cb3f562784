use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::models::Customer;

/// Body of `POST /createcustomer`.
///
/// Missing required fields deserialize to empty strings so that they fail
/// validation (422) instead of JSON parsing (400). Length limits mirror the
/// `customers` table columns. A blank `email` counts as not given and is
/// stored as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "Document is required"),
        length(max = 30, message = "Document must be at most 30 characters")
    )]
    #[schema(example = "123")]
    pub document: String,

    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "First name is required"),
        length(max = 80, message = "First name must be at most 80 characters")
    )]
    #[schema(example = "Ana")]
    pub firstname: String,

    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank", message = "Last name is required"),
        length(max = 80, message = "Last name must be at most 80 characters")
    )]
    #[schema(example = "Lee")]
    pub lastname: String,

    #[validate(length(max = 150, message = "Address must be at most 150 characters"))]
    #[schema(example = "221B Baker Street")]
    pub address: Option<String>,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    #[schema(example = "+44 20 7946 0000")]
    pub phone: Option<String>,

    #[validate(
        custom(function = "validate_optional_email", message = "Invalid email format"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    #[schema(example = "ana.lee@example.com")]
    pub email: Option<String>,
}

/// Body of every `POST /createcustomer` outcome other than a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreateCustomerResponse {
    #[serde(rename = "createCustomerValid")]
    #[schema(example = true)]
    pub create_customer_valid: bool,
}

/// Customer as returned by `GET /findcustomerbyid/{id}`.
///
/// Absent optional fields are rendered as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CustomerResponse {
    #[schema(example = "123")]
    pub document: String,
    #[schema(example = "Ana")]
    pub firstname: String,
    #[schema(example = "Lee")]
    pub lastname: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl From<CreateCustomerRequest> for Customer {
    fn from(req: CreateCustomerRequest) -> Self {
        Self {
            document: req.document,
            firstname: req.firstname,
            lastname: req.lastname,
            address: req.address,
            phone: req.phone,
            email: req.email,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            document: c.document,
            firstname: c.firstname,
            lastname: c.lastname,
            address: c.address,
            phone: c.phone,
            email: c.email,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email"))
}
