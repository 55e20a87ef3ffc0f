//! Transaction service HTTP handlers.
//!
//! - GET /transactions?accountId= - Records of one account
//! - POST /record - Append a record

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    models::transaction::{
        RecordRequest, RecordResponse, TransactionsQuery, TransactionsResponse,
    },
    state::TransactionState,
};

/// List the records of an account in insertion order.
///
/// # Endpoint
///
/// `GET /transactions?accountId=2`
///
/// # Response (200)
///
/// ```json
/// {
///   "accountId": "2",
///   "transactions": [
///     { "id": 1, "accountId": "2", "type": "deposit", "amount": 100.0, "timestamp": 1760800000000 }
///   ]
/// }
/// ```
///
/// An account without records yields an empty list, never an error.
pub async fn list_transactions(
    State(state): State<TransactionState>,
    Query(query): Query<TransactionsQuery>,
) -> Json<TransactionsResponse> {
    let transactions = state.log.for_account(&query.account_id).await;

    Json(TransactionsResponse {
        account_id: query.account_id,
        transactions,
    })
}

/// Append a transaction record.
///
/// # Endpoint
///
/// `POST /record`
///
/// # Request Body
///
/// ```json
/// {
///   "accountId": "2",
///   "type": "deposit",
///   "amount": 100
/// }
/// ```
///
/// The account is not checked against the account service and no money moves.
pub async fn record(
    State(state): State<TransactionState>,
    Json(request): Json<RecordRequest>,
) -> Json<RecordResponse> {
    let transaction = state
        .log
        .append(request.account_id, request.kind, request.amount)
        .await;

    tracing::info!(
        id = transaction.id,
        account_id = %transaction.account_id,
        kind = %transaction.kind,
        "Transaction recorded"
    );

    Json(RecordResponse::recorded(transaction))
}
