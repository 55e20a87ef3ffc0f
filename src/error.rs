//! Error types and HTTP error response handling.
//!
//! This module defines the errors the three services can surface and how
//! they are converted into HTTP responses with a status code and a flat
//! JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to one HTTP status code and one client-facing message.
///
/// # Error Categories
///
/// - **Resource Errors**: the requested account does not exist
/// - **Downstream Errors**: the account service answered with a non-success status
/// - **Business Rule Errors**: the account cannot cover the payment
/// - **Unexpected Errors**: transport failures or unexpected upstream answers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// The balance lookup against the account service did not succeed.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Failed to fetch balance")]
    BalanceUnavailable,

    /// Account balance is lower than the requested amount.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// The account service could not be reached or its body could not be decoded.
    ///
    /// Wraps any `reqwest::Error` through `#[from]`.
    /// Returns HTTP 500 Internal Server Error.
    #[error("Account service request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The account service answered a write with a status we cannot act on.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Account service answered {0}")]
    UnexpectedStatus(StatusCode),
}

impl AppError {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AccountNotFound => StatusCode::NOT_FOUND,
            AppError::BalanceUnavailable | AppError::InsufficientFunds => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::UnexpectedStatus(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Insufficient funds" }
/// ```
///
/// # Status Code Mapping
///
/// - `AccountNotFound` → 404 Not Found
/// - `BalanceUnavailable` → 400 Bad Request
/// - `InsufficientFunds` → 400 Bad Request
/// - `Upstream` / `UnexpectedStatus` → 500 with the generic "Payment error" (details are logged, never returned)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Upstream(_) | AppError::UnexpectedStatus(_) => {
                tracing::error!(error = %self, "Payment failed unexpectedly");
                "Payment error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body_of(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case(AppError::AccountNotFound, StatusCode::NOT_FOUND, "Account not found")]
    #[case(AppError::BalanceUnavailable, StatusCode::BAD_REQUEST, "Failed to fetch balance")]
    #[case(AppError::InsufficientFunds, StatusCode::BAD_REQUEST, "Insufficient funds")]
    #[case(
        AppError::UnexpectedStatus(StatusCode::BAD_GATEWAY),
        StatusCode::INTERNAL_SERVER_ERROR,
        "Payment error"
    )]
    #[tokio::test]
    async fn maps_to_status_and_flat_body(
        #[case] error: AppError,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let (actual_status, body) = body_of(error).await;

        assert_eq!(actual_status, status);
        assert_eq!(body, json!({ "error": message }));
    }
}
