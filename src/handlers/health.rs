//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Which of the three services answered
    pub service: &'static str,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "account-service",
///   "timestamp": "2026-10-18T19:00:00Z"
/// }
/// ```
///
/// Generic over the router state so every service can mount it.
pub async fn health_check<S>(State(_): State<S>) -> Json<HealthResponse>
where
    S: Clone + Send + Sync + ServiceName + 'static,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: S::NAME,
        timestamp: Utc::now(),
    })
}

/// Name reported by the health endpoint of a service.
pub trait ServiceName {
    const NAME: &'static str;
}

impl ServiceName for crate::state::AccountState {
    const NAME: &'static str = "account-service";
}

impl ServiceName for crate::state::PaymentState {
    const NAME: &'static str = "payment-service";
}

impl ServiceName for crate::state::TransactionState {
    const NAME: &'static str = "transaction-service";
}
