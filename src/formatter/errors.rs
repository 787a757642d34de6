use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Format error: '{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("Format error: '{0}' is not a number")]
    InvalidNumber(String),
    #[error("Format error: Overflow")]
    Overflow
}
