//! Transaction log - append-only in-memory record list.
//!
//! Ids are assigned as "current length + 1" while the write guard is held,
//! so concurrent appends still get distinct, gap-free ids.

use chrono::Utc;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::{
    config::{Secret, TokenPolicy},
    models::transaction::TransactionRecord,
};

/// Append-only list of transaction records owned by the transaction service.
#[derive(Debug)]
pub struct TransactionLog {
    records: RwLock<Vec<TransactionRecord>>,
    token: Option<String>,
}

impl TransactionLog {
    /// Create an empty log.
    ///
    /// The value stamped on each record is derived once from `secret`
    /// according to `policy`.
    pub fn new(secret: &Secret, policy: TokenPolicy) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            token: record_token(secret, policy),
        }
    }

    /// Append a record and return a copy of it.
    pub async fn append(&self, account_id: String, kind: String, amount: f64) -> TransactionRecord {
        let mut records = self.records.write().await;

        let record = TransactionRecord {
            id: records.len() as u64 + 1,
            account_id,
            kind,
            amount,
            timestamp: Utc::now().timestamp_millis(),
            token: self.token.clone(),
        };
        records.push(record.clone());

        record
    }

    /// All records of one account, in insertion order.
    pub async fn for_account(&self, account_id: &str) -> Vec<TransactionRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| record.account_id == account_id)
            .cloned()
            .collect()
    }

    /// Total number of records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Value attached to every record under the given policy.
///
/// # Format
///
/// `Fingerprint` yields `sha256:<hex>`, never the secret itself.
fn record_token(secret: &Secret, policy: TokenPolicy) -> Option<String> {
    match policy {
        TokenPolicy::Fingerprint => {
            let mut hasher = Sha256::new();
            hasher.update(secret.expose().as_bytes());
            Some(format!("sha256:{}", hex::encode(hasher.finalize())))
        }
        TokenPolicy::Verbatim => Some(secret.expose().to_string()),
        TokenPolicy::Omit => None,
    }
}
