use async_trait::async_trait;

use crate::models::Customer;
use crate::services::ServiceError;

/// Persistence for customer records keyed by document.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// True iff a customer with this document is stored.
    async fn exists(&self, document: &str) -> Result<bool, ServiceError>;

    /// Insert a new customer.
    ///
    /// Fails with [`ServiceError::DocumentAlreadyExists`] if the document is
    /// taken; an existing record is never overwritten. The check is atomic
    /// with the insert.
    async fn save(&self, customer: &Customer) -> Result<(), ServiceError>;

    async fn find_by_document(&self, document: &str) -> Result<Option<Customer>, ServiceError>;

    async fn health_check(&self) -> Result<(), ServiceError>;
}
