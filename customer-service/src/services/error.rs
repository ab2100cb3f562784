use service_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(anyhow::Error),

    #[error("Customer with document '{0}' already exists")]
    DocumentAlreadyExists(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Database(anyhow::Error::new(err))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Database(e) => AppError::DatabaseError(e),
            e @ ServiceError::DocumentAlreadyExists(_) => AppError::Conflict(anyhow::anyhow!(e)),
            e @ ServiceError::CustomerNotFound(_) => AppError::NotFound(anyhow::anyhow!(e)),
        }
    }
}
