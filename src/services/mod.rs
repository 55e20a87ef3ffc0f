//! Business logic services.
//!
//! Services own the in-memory state of each service and the outbound
//! client of the payment service. Handlers stay thin and delegate here.

pub mod account_client;
pub mod account_store;
pub mod transaction_log;
