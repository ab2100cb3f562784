//! Common test utilities for customer-service integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use customer_service::config::CustomerConfig;
use customer_service::models::Customer;
use customer_service::services::{CustomerStore, InMemoryStore, ServiceError};
use customer_service::{build_router, AppState};
use service_core::middleware::cors::CorsPolicy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use tower::util::ServiceExt;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,customer_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// In-memory store that counts every call reaching it.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: InMemoryStore,
    calls: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> usize {
        self.inner.len()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CustomerStore for RecordingStore {
    async fn exists(&self, document: &str) -> Result<bool, ServiceError> {
        self.record();
        self.inner.exists(document).await
    }

    async fn save(&self, customer: &Customer) -> Result<(), ServiceError> {
        self.record();
        self.inner.save(customer).await
    }

    async fn find_by_document(&self, document: &str) -> Result<Option<Customer>, ServiceError> {
        self.record();
        self.inner.find_by_document(document).await
    }

    async fn health_check(&self) -> Result<(), ServiceError> {
        self.inner.health_check().await
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: RecordingStore,
}

impl TestApp {
    /// Router over a fresh in-memory store with the default CORS policy.
    pub fn spawn() -> Self {
        Self::spawn_with_cors(CorsPolicy::default())
    }

    pub fn spawn_with_cors(cors: CorsPolicy) -> Self {
        init_tracing();

        let store = RecordingStore::default();
        let state = AppState::new(CustomerConfig::in_memory(cors), Arc::new(store.clone()));

        TestApp {
            router: build_router(state),
            store,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn create_customer(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/createcustomer")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        into_json(response).await
    }

    pub async fn find_customer(&self, id: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .send(
                Request::builder()
                    .uri(format!("/findcustomerbyid/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        into_json(response).await
    }
}

pub async fn into_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).expect("Body is not JSON")
    };
    (status, json)
}
