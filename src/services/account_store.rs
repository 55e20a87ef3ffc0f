//! Account store - in-memory balances owned by the account service.
//!
//! The store is created once at startup and shared with handlers through
//! router state.
//!
//! # Atomicity Guarantees
//!
//! Every balance change is a read-modify-write performed under a single
//! write guard. Two concurrent credits on the same account both land.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{config::AccountCreation, error::AppError};

/// Accounts present when demo seeding is enabled.
pub const DEMO_ACCOUNTS: [(&str, f64); 2] = [("1", 1000.0), ("2", 2000.0)];

/// Mapping from account identifier to balance.
#[derive(Debug, Default)]
pub struct AccountStore {
    balances: RwLock<HashMap<String, f64>>,
    creation: AccountCreation,
}

impl AccountStore {
    /// Create an empty store with the given creation policy.
    pub fn new(creation: AccountCreation) -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
            creation,
        }
    }

    /// Create a store pre-populated with the given balances.
    pub fn with_balances<I, K>(creation: AccountCreation, balances: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let balances = balances
            .into_iter()
            .map(|(id, balance)| (id.into(), balance))
            .collect();

        Self {
            balances: RwLock::new(balances),
            creation,
        }
    }

    /// Create a store holding the demo accounts "1" and "2".
    pub fn seeded(creation: AccountCreation) -> Self {
        Self::with_balances(creation, DEMO_ACCOUNTS)
    }

    /// Current balance of an account, `None` if it was never created.
    pub async fn balance(&self, account_id: &str) -> Option<f64> {
        self.balances.read().await.get(account_id).copied()
    }

    /// Add a signed amount to an account and return the new balance.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: account is unknown and the policy is `RejectUnknown`
    pub async fn credit(&self, account_id: &str, amount: f64) -> Result<f64, AppError> {
        let mut balances = self.balances.write().await;

        if !balances.contains_key(account_id) {
            match self.creation {
                AccountCreation::CreateOnDemand => {
                    tracing::debug!(account_id, "Creating account on first credit");
                    balances.insert(account_id.to_string(), 0.0);
                }
                AccountCreation::RejectUnknown => return Err(AppError::AccountNotFound),
            }
        }

        let balance = balances
            .get_mut(account_id)
            .ok_or(AppError::AccountNotFound)?;
        *balance += amount;
        Ok(*balance)
    }

    /// Subtract an amount only if the account can cover it.
    ///
    /// The check and the subtraction happen under the same write guard.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: account is unknown (debits never create accounts)
    /// - `InsufficientFunds`: balance is lower than `amount`, nothing changes
    pub async fn debit_if_sufficient(&self, account_id: &str, amount: f64) -> Result<f64, AppError> {
        let mut balances = self.balances.write().await;

        let balance = balances
            .get_mut(account_id)
            .ok_or(AppError::AccountNotFound)?;

        // Validate sufficient balance
        if *balance < amount {
            return Err(AppError::InsufficientFunds);
        }

        *balance -= amount;
        Ok(*balance)
    }

    /// Number of known accounts.
    pub async fn len(&self) -> usize {
        self.balances.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn seeded_store_holds_demo_accounts() {
        let store = AccountStore::seeded(AccountCreation::CreateOnDemand);

        assert_eq!(store.balance("1").await, Some(1000.0));
        assert_eq!(store.balance("2").await, Some(2000.0));
        assert_eq!(store.balance("3").await, None);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn credit_creates_unknown_account_from_zero() {
        let store = AccountStore::new(AccountCreation::CreateOnDemand);

        assert_eq!(store.credit("new", 42.5).await.unwrap(), 42.5);
        assert_eq!(store.balance("new").await, Some(42.5));
    }

    #[tokio::test]
    async fn credit_rejects_unknown_account_when_configured() {
        let store = AccountStore::new(AccountCreation::RejectUnknown);

        let result = store.credit("ghost", 10.0).await;

        assert!(matches!(result, Err(AppError::AccountNotFound)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn negative_credit_can_overdraw() {
        let store = AccountStore::with_balances(AccountCreation::CreateOnDemand, [("a", 10.0)]);

        assert_eq!(store.credit("a", -25.0).await.unwrap(), -15.0);
    }

    #[tokio::test]
    async fn debit_if_sufficient_leaves_balance_on_shortfall() {
        let store = AccountStore::with_balances(AccountCreation::CreateOnDemand, [("a", 100.0)]);

        let result = store.debit_if_sufficient("a", 100.01).await;

        assert!(matches!(result, Err(AppError::InsufficientFunds)));
        assert_eq!(store.balance("a").await, Some(100.0));
        assert_eq!(store.debit_if_sufficient("a", 100.0).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn debit_if_sufficient_does_not_create_accounts() {
        let store = AccountStore::new(AccountCreation::CreateOnDemand);

        let result = store.debit_if_sufficient("ghost", 1.0).await;

        assert!(matches!(result, Err(AppError::AccountNotFound)));
        assert_eq!(store.balance("ghost").await, None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_credits_are_not_lost() {
        let store = Arc::new(AccountStore::new(AccountCreation::CreateOnDemand));

        let tasks: Vec<_> = (0..200)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.credit("hot", 1.0).await })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.balance("hot").await, Some(200.0));
    }
}
