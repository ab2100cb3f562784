use axum::{
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::{CustomerConfig, StoreBackend};
use crate::handlers;
use crate::services::{CustomerService, CustomerStore, Database, InMemoryStore};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::customers::create_customer,
        handlers::customers::find_customer_by_id,
    ),
    components(schemas(
        crate::dtos::CreateCustomerRequest,
        crate::dtos::CreateCustomerResponse,
        crate::dtos::CustomerResponse,
        crate::dtos::ErrorResponse,
    )),
    tags(
        (name = "Customers", description = "Customer records"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: CustomerConfig,
    pub customers: CustomerService,
}

impl AppState {
    pub fn new(config: CustomerConfig, store: Arc<dyn CustomerStore>) -> Self {
        Self {
            config,
            customers: CustomerService::new(store),
        }
    }
}

/// Build the HTTP router.
///
/// The cross-origin policy is taken from `state.config.cors` and wraps every
/// route, including error responses produced by inner layers.
pub fn build_router(state: AppState) -> Router {
    let cors = state.config.cors.layer();

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .route("/createcustomer", post(handlers::create_customer))
        .route("/findcustomerbyid/:id", get(handlers::find_customer_by_id))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}

/// Open the configured customer store, running migrations for PostgreSQL.
pub async fn connect_store(config: &CustomerConfig) -> Result<Arc<dyn CustomerStore>, AppError> {
    match config.store.backend {
        StoreBackend::Postgres => {
            let db_config = config.store.database.as_ref().ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!("DATABASE_URL is required for postgres"))
            })?;
            let db = Database::connect(db_config).await.map_err(|e| {
                tracing::error!("Failed to connect to PostgreSQL: {}", e);
                e
            })?;
            db.run_migrations().await.map_err(|e| {
                tracing::error!("Failed to run database migrations: {}", e);
                e
            })?;
            Ok(Arc::new(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory customer store; records are lost on restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: CustomerConfig) -> Result<Self, AppError> {
        if config.environment.is_prod() && config.cors.allows_all() {
            tracing::warn!("CORS allows every origin with credentials in production");
        }

        let store = connect_store(&config).await?;
        Self::build_with_store(config, store).await
    }

    /// Build around an already opened store.
    pub async fn build_with_store(
        config: CustomerConfig,
        store: Arc<dyn CustomerStore>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let app = build_router(AppState::new(config, store));

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(address = %addr, port, "Listening");

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
