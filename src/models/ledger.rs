use crate::models::errors::LedgerError;
use crate::models::{NewTransaction, Transaction};
use crate::types::{Amount, TransactionId};
use std::slice::Iter;
use tracing::debug;

/// The three aggregate figures shown next to the transaction table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub incomes: Amount,
    pub expenses: Amount,
    pub total: Amount
}

/// In-memory, insertion-ordered list of transactions.
///
/// Field validation is left to the form. The ledger only refuses additions
/// that would overflow an aggregate or run out of identifiers, which are
/// handed out as one more than the largest identifier currently held.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new()
        }
    }

    /// Builds a ledger from previously persisted transactions, keeping their order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Appends a transaction and returns the identifier assigned to it.
    ///
    /// # Errors
    /// Returns `LedgerError::AggregateOverflow` when the amount would push
    /// incomes or expenses past the `Amount` range, and
    /// `LedgerError::IdentifiersExhausted` when the largest identifier is
    /// already `u64::MAX`. The ledger is left untouched in both cases.
    pub fn add(&mut self, transaction: NewTransaction) -> Result<TransactionId, LedgerError> {
        let amount = transaction.amount;
        let aggregate = if amount.is_negative() { self.expenses() } else { self.incomes() };
        if aggregate.checked_add(amount).is_none() {
            return Err(LedgerError::AggregateOverflow { amount });
        }

        let transaction_id = self.next_id()?;
        self.transactions.push(transaction.into_transaction(transaction_id));

        debug!("Transaction [{transaction_id}] appended to ledger");

        Ok(transaction_id)
    }

    /// Removes the transaction with the given identifier.
    ///
    /// # Errors
    /// Returns `LedgerError::TransactionNotFound` when no transaction carries
    /// `transaction_id`; the ledger is left untouched in that case.
    pub fn remove(&mut self, transaction_id: TransactionId) -> Result<Transaction, LedgerError> {
        let position = self.transactions.iter()
            .position(|transaction| transaction.id == transaction_id)
            .ok_or_else(|| LedgerError::transaction_not_found(transaction_id))?;

        debug!("Transaction [{transaction_id}] removed from ledger at position [{position}]");

        Ok(self.transactions.remove(position))
    }

    pub fn get(&self, transaction_id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == transaction_id)
    }

    pub fn iter(&self) -> Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all amounts strictly greater than zero.
    pub fn incomes(&self) -> Amount {
        self.iter().filter(|transaction| transaction.is_income()).map(|transaction| transaction.amount).sum()
    }

    /// Sum of all amounts strictly less than zero.
    pub fn expenses(&self) -> Amount {
        self.iter().filter(|transaction| transaction.is_expense()).map(|transaction| transaction.amount).sum()
    }

    /// Net balance: incomes plus expenses.
    pub fn total(&self) -> Amount {
        let mut total = self.incomes();
        total += self.expenses();
        total
    }

    pub fn summary(&self) -> Summary {
        Summary {
            incomes: self.incomes(),
            expenses: self.expenses(),
            total: self.total()
        }
    }

    fn next_id(&self) -> Result<TransactionId, LedgerError> {
        match self.iter().map(|transaction| transaction.id).max() {
            None => Ok(1),
            Some(last_id) => last_id.checked_add(1).ok_or(LedgerError::IdentifiersExhausted { last_id })
        }
    }
}
