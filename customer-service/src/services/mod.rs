//! Services layer for customer-service.
//!
//! Business rules in [`CustomerService`], persistence behind [`CustomerStore`].

mod customer;
mod database;
pub mod error;
mod memory;
pub mod metrics;
mod store;

pub use customer::CustomerService;
pub use database::Database;
pub use error::ServiceError;
pub use memory::InMemoryStore;
pub use store::CustomerStore;
