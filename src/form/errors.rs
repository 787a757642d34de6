use crate::app::AppError;
use crate::formatter::FormatError;
use crate::types::AmountError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("The transaction form is not open")]
    Closed,
    #[error("All fields are required")]
    Validation,
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error(transparent)]
    Date(#[from] FormatError),
    #[error(transparent)]
    App(#[from] AppError)
}
