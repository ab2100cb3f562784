//! PostgreSQL customer store integration tests.
//!
//! Run with: TEST_DATABASE_URL=postgres://... cargo test -p customer-service -- --ignored

mod common;

use customer_service::config::DatabaseConfig;
use customer_service::models::Customer;
use customer_service::services::{CustomerService, CustomerStore, Database, ServiceError};
use std::sync::Arc;

async fn connect() -> Database {
    common::init_tracing();

    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must be set to run PostgreSQL tests");

    let db = Database::connect(&DatabaseConfig {
        url,
        max_connections: 2,
        min_connections: 1,
    })
    .await
    .expect("Failed to connect to PostgreSQL");

    db.run_migrations().await.expect("Failed to run migrations");
    db
}

/// Documents are at most 30 characters; keep test keys unique per run.
fn unique_document(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos % 1_000_000_000_000)
}

fn customer(document: &str) -> Customer {
    Customer {
        document: document.to_string(),
        firstname: "Ana".to_string(),
        lastname: "Lee".to_string(),
        address: None,
        phone: Some("555-0100".to_string()),
        email: None,
    }
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn save_find_and_exists() {
    let db = connect().await;
    let document = unique_document("pg");

    assert!(!db.exists(&document).await.unwrap());
    db.save(&customer(&document)).await.unwrap();

    assert!(db.exists(&document).await.unwrap());
    assert_eq!(
        db.find_by_document(&document).await.unwrap(),
        Some(customer(&document))
    );
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn duplicate_insert_is_reported_not_overwritten() {
    let db = connect().await;
    let document = unique_document("dup");

    db.save(&customer(&document)).await.unwrap();

    let mut other = customer(&document);
    other.firstname = "Bob".to_string();
    let err = db.save(&other).await.unwrap_err();
    assert!(matches!(err, ServiceError::DocumentAlreadyExists(_)));

    let stored = db.find_by_document(&document).await.unwrap().unwrap();
    assert_eq!(stored.firstname, "Ana");
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn concurrent_creates_store_exactly_one() {
    let db = connect().await;
    let service = CustomerService::new(Arc::new(db));
    let document = unique_document("race");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            let req = customer_service::dtos::CreateCustomerRequest {
                document: document.clone(),
                firstname: "Ana".to_string(),
                lastname: "Lee".to_string(),
                ..Default::default()
            };
            tokio::spawn(async move { service.create_customer(req).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn health_check_succeeds() {
    let db = connect().await;
    db.health_check().await.unwrap();
}
