//! HTTP client for the account service, used by the payment service.
//!
//! One `reqwest::Client` is built at startup and reused for every call.
//! Each request is bounded by the configured timeout; nothing is retried.

use std::time::Duration;

use axum::http::StatusCode;
use url::Url;

use crate::{
    error::AppError,
    models::account::{AccountBalance, CreditRequest, DebitRequest},
};

/// Thin typed wrapper over the account service endpoints.
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountClient {
    /// Build a client for the account service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Look up the balance of an account.
    ///
    /// # Errors
    ///
    /// - `BalanceUnavailable`: the account service answered with a non-success status
    /// - `Upstream`: the request failed or the body was not a balance
    pub async fn balance(&self, account_id: &str) -> Result<AccountBalance, AppError> {
        let response = self
            .http
            .get(self.endpoint("balance"))
            .query(&[("accountId", account_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(account_id, status = %response.status(), "Balance lookup failed");
            return Err(AppError::BalanceUnavailable);
        }

        Ok(response.json::<AccountBalance>().await?)
    }

    /// Add a signed amount to an account.
    ///
    /// # Errors
    ///
    /// - `UnexpectedStatus`: the account service refused the credit
    /// - `Upstream`: the request failed or the body was not a balance
    pub async fn credit(&self, account_id: &str, amount: f64) -> Result<AccountBalance, AppError> {
        let body = CreditRequest {
            account_id: account_id.to_string(),
            amount,
        };

        let response = self
            .http
            .post(self.endpoint("credit"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UnexpectedStatus(response.status()));
        }

        Ok(response.json::<AccountBalance>().await?)
    }

    /// Ask the account service to debit only if the balance covers `amount`.
    ///
    /// # Errors
    ///
    /// - `BalanceUnavailable`: the account is unknown to the account service
    /// - `InsufficientFunds`: the account service rejected the debit
    /// - `UnexpectedStatus` / `Upstream`: anything else
    pub async fn debit_if_sufficient(
        &self,
        account_id: &str,
        amount: f64,
    ) -> Result<AccountBalance, AppError> {
        let body = DebitRequest {
            account_id: account_id.to_string(),
            amount,
        };

        let response = self
            .http
            .post(self.endpoint("debit"))
            .json(&body)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<AccountBalance>().await?),
            StatusCode::NOT_FOUND => Err(AppError::BalanceUnavailable),
            StatusCode::BAD_REQUEST => Err(AppError::InsufficientFunds),
            status => Err(AppError::UnexpectedStatus(status)),
        }
    }
}
