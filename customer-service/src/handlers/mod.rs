//! HTTP handlers for customer-service.

pub mod customers;
pub mod health;
pub mod metrics;

pub use customers::*;
pub use health::*;
pub use metrics::*;
