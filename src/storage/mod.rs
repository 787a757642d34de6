mod errors;
mod key_value;
mod transaction_store;

use crate::models::Transaction;

pub use errors::StorageError;
pub use key_value::{FileKeyValueStore, KeyValueStore};
#[cfg(test)]
pub use key_value::MemoryKeyValueStore;
pub use transaction_store::{TransactionStore, STORAGE_KEY};

/// Durable home of the full, ordered transaction list.
pub trait Storage {
    fn load(&self) -> Result<Vec<Transaction>, StorageError>;
    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError>;
}
