//! Transaction record models and API request/response types.
//!
//! This module defines:
//! - `TransactionRecord`: An immutable entry of the transaction log
//! - `RecordRequest` / `RecordResponse`: Body types of `POST /record`
//! - `TransactionsQuery` / `TransactionsResponse`: Types of `GET /transactions`

use serde::{Deserialize, Serialize};

use crate::models::de;

/// Status string returned for every appended record.
pub const TRANSACTION_RECORDED: &str = "Transaction recorded";

/// One entry of the append-only transaction log.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "accountId": "2",
///   "type": "deposit",
///   "amount": 100.0,
///   "timestamp": 1760800000000,
///   "token": "sha256:9f86d081..."
/// }
/// ```
///
/// Records are never modified or deleted once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Position in the log, starting at 1
    pub id: u64,

    pub account_id: String,

    /// Free-form kind, e.g. "deposit" or "withdrawal"
    #[serde(rename = "type")]
    pub kind: String,

    pub amount: f64,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,

    /// Token derived from the service secret, see `TokenPolicy`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Request to append a transaction record.
///
/// ```json
/// {
///   "accountId": "2",
///   "type": "deposit",
///   "amount": 100
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    #[serde(deserialize_with = "de::account_id")]
    pub account_id: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(deserialize_with = "de::amount")]
    pub amount: f64,
}

/// Response of `POST /record`.
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub status: &'static str,
    pub transaction: TransactionRecord,
}

impl RecordResponse {
    pub fn recorded(transaction: TransactionRecord) -> Self {
        Self {
            status: TRANSACTION_RECORDED,
            transaction,
        }
    }
}

/// Query parameters of `GET /transactions?accountId=...`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsQuery {
    pub account_id: String,
}

/// Response of `GET /transactions`, records in insertion order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    pub account_id: String,
    pub transactions: Vec<TransactionRecord>,
}
