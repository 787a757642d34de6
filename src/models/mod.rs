mod errors;
mod ledger;
#[cfg(test)]
mod tests;
mod transaction;

pub use errors::LedgerError;
pub use ledger::{Ledger, Summary};
pub use transaction::{NewTransaction, Transaction};
