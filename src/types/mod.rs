mod amount;
mod errors;
mod number;
#[cfg(test)]
mod tests;

pub use amount::{Amount, SCALE};
pub use errors::AmountError;
pub(crate) use number::NumberLiteral;

pub type TransactionId = u64;
