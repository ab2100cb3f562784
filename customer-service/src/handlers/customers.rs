use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

use crate::dtos::{CreateCustomerRequest, CreateCustomerResponse, CustomerResponse};
use crate::startup::AppState;
use crate::utils::ValidatedJson;

/// Create a customer
#[utoipa::path(
    post,
    path = "/createcustomer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CreateCustomerResponse),
        (status = 409, description = "Document already registered", body = CreateCustomerResponse),
        (status = 400, description = "Malformed body", body = crate::dtos::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "Customers"
)]
#[tracing::instrument(skip(state, req))]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CreateCustomerResponse>), AppError> {
    let created = state.customers.create_customer(req).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::CONFLICT
    };

    Ok((
        status,
        Json(CreateCustomerResponse {
            create_customer_valid: created,
        }),
    ))
}

/// Find a customer by document
#[utoipa::path(
    get,
    path = "/findcustomerbyid/{id}",
    params(
        ("id" = String, Path, description = "Customer document")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "No customer with this document", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "Customers"
)]
#[tracing::instrument(skip(state))]
pub async fn find_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state.customers.find_by_document(&id).await?;
    Ok(Json(customer))
}
