//! Account, payment and transaction services.
//!
//! Three small JSON-over-HTTP services that keep their state in memory:
//!
//! - **Account service**: balances keyed by account id, lookup and signed credit
//! - **Payment service**: checks funds with the account service, then debits it
//! - **Transaction service**: append-only list of transaction records
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Outbound HTTP**: reqwest, payment service to account service only
//! - **State**: owned stores behind `tokio::sync::RwLock`, injected via `State`
//! - **Format**: JSON requests/responses with camelCase fields
//!
//! Each service has its own binary under `src/bin/`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod telemetry;
