use crate::types::{Amount, TransactionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Transaction [{transaction_id}] was not found in the ledger")]
    TransactionNotFound {
        transaction_id: TransactionId
    },
    #[error("Adding {amount} would overflow the ledger aggregates")]
    AggregateOverflow {
        amount: Amount
    },
    #[error("No transaction identifiers are left after [{last_id}]")]
    IdentifiersExhausted {
        last_id: TransactionId
    }
}

impl LedgerError {
    pub fn transaction_not_found(transaction_id: TransactionId) -> Self {
        Self::TransactionNotFound { transaction_id }
    }
}
