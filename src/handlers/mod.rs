//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, query string)
//! 2. Delegates to a service (store, log or account client)
//! 3. Returns an HTTP response (JSON, status code)

/// Account service endpoints
pub mod accounts;
/// Health endpoint shared by all services
pub mod health;
/// Payment service endpoint
pub mod payments;
/// Transaction service endpoints
pub mod transactions;
