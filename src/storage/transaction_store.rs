use crate::models::Transaction;
use crate::storage::errors::StorageError;
use crate::storage::key_value::KeyValueStore;
use crate::storage::Storage;
use crate::types::{Amount, TransactionId};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Fixed, namespaced key holding the serialized transaction list.
pub const STORAGE_KEY: &str = "dev.finances:transactions";

/// Shape accepted when reading; records written before identifiers existed
/// have no `id`.
#[derive(Debug, Deserialize)]
struct TransactionRecord {
    #[serde(default)]
    id: Option<TransactionId>,
    description: String,
    amount: Amount,
    date: String
}

/// Persists the whole transaction list as one JSON array under [`STORAGE_KEY`].
pub struct TransactionStore<K: KeyValueStore> {
    backend: K
}

impl<K: KeyValueStore> TransactionStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }
}

impl<K: KeyValueStore> Storage for TransactionStore<K> {
    fn load(&self) -> Result<Vec<Transaction>, StorageError> {
        let Some(raw) = self.backend.get_item(STORAGE_KEY)? else {
            debug!("No stored transactions under [{STORAGE_KEY}]");
            return Ok(Vec::new());
        };

        let value: Value = serde_json::from_str(&raw).map_err(malformed)?;

        if is_falsy(&value) {
            debug!("Stored value under [{STORAGE_KEY}] is empty");
            return Ok(Vec::new());
        }

        let records: Vec<TransactionRecord> = serde_json::from_value(value).map_err(malformed)?;
        let transactions = assign_missing_ids(records)?;

        debug!("Loaded [{}] transactions from [{STORAGE_KEY}]", transactions.len());

        Ok(transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let json = serde_json::to_string(transactions)?;
        self.backend.set_item(STORAGE_KEY, &json)?;

        debug!("Saved [{}] transactions to [{STORAGE_KEY}]", transactions.len());

        Ok(())
    }
}

fn malformed(source: serde_json::Error) -> StorageError {
    StorageError::Malformed {
        key: STORAGE_KEY.to_string(),
        source
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false
    }
}

/// Gives records without an `id` fresh identifiers after the largest stored one.
///
/// Stored identifiers must be unique, otherwise removal by identifier would
/// be ambiguous.
fn assign_missing_ids(records: Vec<TransactionRecord>) -> Result<Vec<Transaction>, StorageError> {
    let mut stored_ids = HashSet::new();
    for transaction_id in records.iter().filter_map(|record| record.id) {
        if !stored_ids.insert(transaction_id) {
            return Err(StorageError::DuplicateId {
                key: STORAGE_KEY.to_string(),
                transaction_id
            });
        }
    }

    let mut last_id = stored_ids.iter().max().copied().unwrap_or(0);
    let mut assigned = 0usize;
    let mut transactions = Vec::with_capacity(records.len());

    for record in records {
        let id = match record.id {
            Some(id) => id,
            None => {
                last_id = last_id.checked_add(1).ok_or_else(|| StorageError::IdentifiersExhausted {
                    key: STORAGE_KEY.to_string()
                })?;
                assigned += 1;
                last_id
            }
        };

        transactions.push(Transaction {
            id,
            description: record.description,
            amount: record.amount,
            date: record.date
        });
    }

    if assigned > 0 {
        warn!("Assigned identifiers to [{assigned}] stored transactions that had none");
    }

    Ok(transactions)
}
