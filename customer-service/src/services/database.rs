//! PostgreSQL customer store.

use async_trait::async_trait;
use service_core::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use crate::config::DatabaseConfig;
use crate::models::Customer;
use crate::services::{CustomerStore, ServiceError};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(config), fields(service = "customer-service"))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for Database {
    #[instrument(skip(self))]
    async fn exists(&self, document: &str) -> Result<bool, ServiceError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM customers WHERE document = $1)",
        )
        .bind(document)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    #[instrument(skip(self, customer), fields(document = %customer.document))]
    async fn save(&self, customer: &Customer) -> Result<(), ServiceError> {
        sqlx::query(
            r#"
            INSERT INTO customers (document, first_name, last_name, address, phone, email)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&customer.document)
        .bind(&customer.firstname)
        .bind(&customer.lastname)
        .bind(&customer.address)
        .bind(&customer.phone)
        .bind(&customer.email)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ServiceError::DocumentAlreadyExists(customer.document.clone())
            }
            _ => ServiceError::Database(anyhow::anyhow!("Failed to insert customer: {}", e)),
        })?;

        info!("Customer stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_document(&self, document: &str) -> Result<Option<Customer>, ServiceError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT document, first_name, last_name, address, phone, email
            FROM customers
            WHERE document = $1
            "#,
        )
        .bind(document)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn health_check(&self) -> Result<(), ServiceError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::Database(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }
}
