//! Domain models for customer-service.

mod customer;

pub use customer::Customer;
