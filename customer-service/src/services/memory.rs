//! In-process customer store for local runs and tests.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::models::Customer;
use crate::services::{CustomerStore, ServiceError};

#[derive(Clone, Default)]
pub struct InMemoryStore {
    customers: Arc<DashMap<String, Customer>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[async_trait]
impl CustomerStore for InMemoryStore {
    async fn exists(&self, document: &str) -> Result<bool, ServiceError> {
        Ok(self.customers.contains_key(document))
    }

    async fn save(&self, customer: &Customer) -> Result<(), ServiceError> {
        match self.customers.entry(customer.document.clone()) {
            Entry::Occupied(_) => Err(ServiceError::DocumentAlreadyExists(
                customer.document.clone(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(customer.clone());
                Ok(())
            }
        }
    }

    async fn find_by_document(&self, document: &str) -> Result<Option<Customer>, ServiceError> {
        Ok(self.customers.get(document).map(|c| c.value().clone()))
    }

    async fn health_check(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(document: &str, firstname: &str) -> Customer {
        Customer {
            document: document.to_string(),
            firstname: firstname.to_string(),
            lastname: "Lee".to_string(),
            address: None,
            phone: None,
            email: None,
        }
    }

    #[tokio::test]
    async fn save_then_find() {
        let store = InMemoryStore::new();
        store.save(&customer("123", "Ana")).await.unwrap();

        assert!(store.exists("123").await.unwrap());
        assert_eq!(
            store.find_by_document("123").await.unwrap(),
            Some(customer("123", "Ana"))
        );
        assert_eq!(store.find_by_document("456").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_never_overwrites() {
        let store = InMemoryStore::new();
        store.save(&customer("123", "Ana")).await.unwrap();

        let err = store.save(&customer("123", "Bob")).await.unwrap_err();
        assert!(matches!(err, ServiceError::DocumentAlreadyExists(ref d) if d == "123"));

        let stored = store.find_by_document("123").await.unwrap().unwrap();
        assert_eq!(stored.firstname, "Ana");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_saves_admit_exactly_one() {
        let store = InMemoryStore::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.save(&customer("777", &format!("n{i}"))).await })
            })
            .collect();

        let mut stored = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                stored += 1;
            }
        }

        assert_eq!(stored, 1);
        assert_eq!(store.len(), 1);
    }
}
