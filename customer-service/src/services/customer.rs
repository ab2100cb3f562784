//! Customer business rules.

use metrics::counter;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::dtos::{CreateCustomerRequest, CustomerResponse};
use crate::models::Customer;
use crate::services::{CustomerStore, ServiceError};

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn CustomerStore> {
        &self.store
    }

    /// Store a new customer.
    ///
    /// Returns `Ok(false)` when the document is already registered, whether
    /// that is seen by the existence check or by the insert itself.
    #[instrument(skip(self, req), fields(document = %req.document))]
    pub async fn create_customer(&self, req: CreateCustomerRequest) -> Result<bool, ServiceError> {
        if self.store.exists(&req.document).await? {
            return Ok(self.duplicate(&req.document));
        }

        let customer = Customer::from(req);
        match self.store.save(&customer).await {
            Ok(()) => {
                counter!("customers_create_total", "outcome" => "created").increment(1);
                info!("Customer created");
                Ok(true)
            }
            // A concurrent create committed between the check and the insert
            Err(ServiceError::DocumentAlreadyExists(document)) => Ok(self.duplicate(&document)),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_document(&self, document: &str) -> Result<CustomerResponse, ServiceError> {
        self.store
            .find_by_document(document)
            .await?
            .map(CustomerResponse::from)
            .ok_or_else(|| ServiceError::CustomerNotFound(document.to_string()))
    }

    fn duplicate(&self, document: &str) -> bool {
        counter!("customers_create_total", "outcome" => "duplicate").increment(1);
        warn!(document = %document, "Customer already exists");
        false
    }
}
