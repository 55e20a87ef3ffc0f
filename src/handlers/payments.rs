//! Payment service HTTP handler.
//!
//! - POST /pay - Check funds with the account service, then debit

use axum::{Json, extract::State};

use crate::{
    config::PaymentMode,
    error::AppError,
    models::payment::{PaymentRequest, PaymentResponse},
    state::PaymentState,
};

/// Process a payment against an account.
///
/// # Endpoint
///
/// `POST /pay`
///
/// # Process (check-then-debit)
///
/// 1. Fetch the balance from the account service
/// 2. Reject if the balance is lower than the amount
/// 3. Post a credit of `-amount` to the account service
///
/// The read and the write are separate calls, so a concurrent change to
/// the same account between them is not detected. With
/// `PaymentMode::AtomicDebit` the account service does both in one step.
///
/// # Response
///
/// - **Success (200 OK)**: `{"accountId", "amount", "status": "Payment processed"}`
/// - **Error (400)**: `Failed to fetch balance` or `Insufficient funds`
/// - **Error (500)**: `Payment error` for anything unexpected
pub async fn pay(
    State(state): State<PaymentState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let PaymentRequest { account_id, amount } = request;

    match state.mode {
        PaymentMode::CheckThenDebit => {
            let current = state.accounts.balance(&account_id).await?;

            if current.balance < amount {
                tracing::info!(
                    account_id = %account_id,
                    amount,
                    balance = current.balance,
                    "Payment rejected"
                );
                return Err(AppError::InsufficientFunds);
            }

            state.accounts.credit(&account_id, -amount).await?;
        }
        PaymentMode::AtomicDebit => {
            state
                .accounts
                .debit_if_sufficient(&account_id, amount)
                .await?;
        }
    }

    tracing::info!(account_id = %account_id, amount, "Payment processed");

    Ok(Json(PaymentResponse::processed(account_id, amount)))
}
