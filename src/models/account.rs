//! Account balance models and API request/response types.
//!
//! This module defines:
//! - `AccountBalance`: Response body for balance lookups, credits and debits
//! - `BalanceQuery`: Query string of `GET /balance`
//! - `CreditRequest` / `DebitRequest`: Request bodies for balance changes

use serde::{Deserialize, Serialize};

use crate::models::de;

/// Current balance of one account.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountId": "1",
///   "balance": 1500.0
/// }
/// ```
///
/// Returned by the account service and decoded again by the payment
/// service, so it derives both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub account_id: String,
    pub balance: f64,
}

impl AccountBalance {
    pub fn new(account_id: impl Into<String>, balance: f64) -> Self {
        Self {
            account_id: account_id.into(),
            balance,
        }
    }
}

/// Query parameters of `GET /balance?accountId=...`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceQuery {
    pub account_id: String,
}

/// Request to add a signed amount to an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountId": "1",
///   "amount": 500.0
/// }
/// ```
///
/// A negative amount acts as a debit. Neither sign nor magnitude is
/// validated, so the balance may go below zero.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRequest {
    #[serde(deserialize_with = "de::account_id")]
    pub account_id: String,

    #[serde(deserialize_with = "de::amount")]
    pub amount: f64,
}

/// Request to take an amount from an account only if it can cover it.
///
/// Same shape as `CreditRequest`, but the amount is what gets subtracted.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitRequest {
    #[serde(deserialize_with = "de::account_id")]
    pub account_id: String,

    #[serde(deserialize_with = "de::amount")]
    pub amount: f64,
}
