//! Per-service state shared with handlers through axum `State`.
//!
//! Each service builds its state once at startup; cloning only bumps
//! reference counts.

use std::sync::Arc;

use crate::{
    config::PaymentMode,
    services::{
        account_client::AccountClient, account_store::AccountStore,
        transaction_log::TransactionLog,
    },
};

/// State of the account service.
#[derive(Debug, Clone)]
pub struct AccountState {
    pub store: Arc<AccountStore>,
}

impl AccountState {
    pub fn new(store: AccountStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// State of the payment service.
#[derive(Debug, Clone)]
pub struct PaymentState {
    pub accounts: AccountClient,
    pub mode: PaymentMode,
}

impl PaymentState {
    pub fn new(accounts: AccountClient, mode: PaymentMode) -> Self {
        Self { accounts, mode }
    }
}

/// State of the transaction service.
#[derive(Debug, Clone)]
pub struct TransactionState {
    pub log: Arc<TransactionLog>,
}

impl TransactionState {
    pub fn new(log: TransactionLog) -> Self {
        Self { log: Arc::new(log) }
    }
}
