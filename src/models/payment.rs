//! Payment API request/response types.

use serde::{Deserialize, Serialize};

use crate::models::de;

/// Status string returned for every successful payment.
pub const PAYMENT_PROCESSED: &str = "Payment processed";

/// Request to pay an amount out of an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountId": "1",
///   "amount": 1500.0
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(deserialize_with = "de::account_id")]
    pub account_id: String,

    #[serde(deserialize_with = "de::amount")]
    pub amount: f64,
}

/// Response returned when the debit has been issued.
///
/// ```json
/// {
///   "accountId": "1",
///   "amount": 1500.0,
///   "status": "Payment processed"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub account_id: String,
    pub amount: f64,
    pub status: &'static str,
}

impl PaymentResponse {
    pub fn processed(account_id: String, amount: f64) -> Self {
        Self {
            account_id,
            amount,
            status: PAYMENT_PROCESSED,
        }
    }
}
