//! Router construction for the three services.
//!
//! Every router carries the HTTP trace layer and its own state.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{accounts, health, payments, transactions},
    state::{AccountState, PaymentState, TransactionState},
};

/// Routes of the account service.
pub fn account_router(state: AccountState) -> Router {
    Router::new()
        .route("/health", get(health::health_check::<AccountState>))
        .route("/balance", get(accounts::get_balance))
        .route("/credit", post(accounts::credit))
        .route("/debit", post(accounts::debit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes of the payment service.
pub fn payment_router(state: PaymentState) -> Router {
    Router::new()
        .route("/health", get(health::health_check::<PaymentState>))
        .route("/pay", post(payments::pay))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes of the transaction service.
pub fn transaction_router(state: TransactionState) -> Router {
    Router::new()
        .route("/health", get(health::health_check::<TransactionState>))
        .route("/transactions", get(transactions::list_transactions))
        .route("/record", post(transactions::record))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
