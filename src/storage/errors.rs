use std::path::PathBuf;

use thiserror::Error;

use crate::types::TransactionId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage file [{}] is not a valid key-value document: {source}", path.display())]
    MalformedFile {
        path: PathBuf,
        source: serde_json::Error
    },
    #[error("Stored value under [{key}] is not a transaction list: {source}")]
    Malformed {
        key: String,
        source: serde_json::Error
    },
    #[error("Stored value under [{key}] holds transaction [{transaction_id}] more than once")]
    DuplicateId {
        key: String,
        transaction_id: TransactionId
    },
    #[error("Stored value under [{key}] leaves no identifiers for transactions without one")]
    IdentifiersExhausted {
        key: String
    },
    #[error("Storage error: could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error)
}
