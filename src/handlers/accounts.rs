//! Account service HTTP handlers.
//!
//! This module implements the account-related endpoints:
//! - GET /balance?accountId= - Look up a balance
//! - POST /credit - Add a signed amount to an account
//! - POST /debit - Subtract an amount only if the balance covers it

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    error::AppError,
    models::account::{AccountBalance, BalanceQuery, CreditRequest, DebitRequest},
    state::AccountState,
};

/// Get the balance of an account.
///
/// # Endpoint
///
/// `GET /balance?accountId=1`
///
/// # Response
///
/// - **Success (200 OK)**: `{"accountId": "1", "balance": 1000.0}`
/// - **Error (404)**: Account was never created
pub async fn get_balance(
    State(state): State<AccountState>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<AccountBalance>, AppError> {
    let balance = state
        .store
        .balance(&query.account_id)
        .await
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(AccountBalance::new(query.account_id, balance)))
}

/// Credit an account with a signed amount.
///
/// # Endpoint
///
/// `POST /credit`
///
/// # Request Body
///
/// ```json
/// {
///   "accountId": "1",
///   "amount": 500.0
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The new balance
/// - **Error (404)**: Unknown account while the store rejects unknown accounts
///
/// A negative amount debits without any overdraft check.
pub async fn credit(
    State(state): State<AccountState>,
    Json(request): Json<CreditRequest>,
) -> Result<Json<AccountBalance>, AppError> {
    let balance = state
        .store
        .credit(&request.account_id, request.amount)
        .await?;

    tracing::info!(
        account_id = %request.account_id,
        amount = request.amount,
        balance,
        "Account credited"
    );

    Ok(Json(AccountBalance::new(request.account_id, balance)))
}

/// Debit an account only if it can cover the amount.
///
/// # Endpoint
///
/// `POST /debit`
///
/// # Response
///
/// - **Success (200 OK)**: The new balance
/// - **Error (404)**: Account was never created
/// - **Error (400)**: Insufficient funds, balance unchanged
pub async fn debit(
    State(state): State<AccountState>,
    Json(request): Json<DebitRequest>,
) -> Result<Json<AccountBalance>, AppError> {
    let balance = state
        .store
        .debit_if_sufficient(&request.account_id, request.amount)
        .await?;

    tracing::info!(
        account_id = %request.account_id,
        amount = request.amount,
        balance,
        "Account debited"
    );

    Ok(Json(AccountBalance::new(request.account_id, balance)))
}
