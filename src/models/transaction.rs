use serde::{Deserialize, Serialize};

use crate::types::{Amount, TransactionId};

/// A single recorded transaction as held by the ledger and persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable identifier used by removal controls.
    pub id: TransactionId,
    /// Free text label, rendered as-is.
    pub description: String,
    /// Signed minor units; positive is income, negative is expense.
    pub amount: Amount,
    /// Date as typed, `YYYY-MM-DD`.
    pub date: String
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

/// A validated transaction that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Amount,
    pub date: String
}

impl NewTransaction {
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            date: self.date
        }
    }
}
