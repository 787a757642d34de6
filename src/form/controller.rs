use crate::app::App;
use crate::form::errors::FormError;
use crate::formatter::parse_display_date;
use crate::models::NewTransaction;
use crate::render::Renderer;
use crate::storage::Storage;
use crate::types::{Amount, TransactionId};
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open
}

/// Raw text of the three form inputs, exactly as entered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub description: String,
    pub amount: String,
    pub date: String
}

impl FormFields {
    fn has_blank_field(&self) -> bool {
        [&self.description, &self.amount, &self.date].iter().any(|field| field.trim().is_empty())
    }
}

/// The new-transaction form and the modal that hosts it.
#[derive(Debug, Default, Clone)]
pub struct FormController {
    state: ModalState,
    fields: FormFields
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open;
    }

    /// Hides the modal. Entered values stay in the fields.
    pub fn cancel(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn fill(&mut self, description: impl Into<String>, amount: impl Into<String>, date: impl Into<String>) {
        self.fields = FormFields {
            description: description.into(),
            amount: amount.into(),
            date: date.into()
        };
    }

    /// Validates and converts the fields, then hands the transaction to `app`.
    ///
    /// On success the fields are cleared and the modal closes. On any error
    /// the modal stays open and the entered values are kept.
    ///
    /// # Errors
    /// - `FormError::Closed` if the modal is not open.
    /// - `FormError::Validation` if any field is blank or whitespace only.
    /// - `FormError::Amount` / `FormError::Date` if a field cannot be converted.
    /// - `FormError::App` if the ledger could not be reloaded or persisted.
    pub fn submit<S: Storage, R: Renderer>(&mut self, app: &mut App<S, R>) -> Result<TransactionId, FormError> {
        if !self.is_open() {
            return Err(FormError::Closed);
        }

        let transaction = self.validate_fields()
            .and_then(|_| self.format_values())
            .inspect_err(|error| warn!("Transaction form rejected: {error}"))?;

        let transaction_id = app.add(transaction)?;

        self.clear_fields();
        self.state = ModalState::Closed;

        debug!("Transaction form submitted as [{transaction_id}]");

        Ok(transaction_id)
    }

    fn validate_fields(&self) -> Result<(), FormError> {
        if self.fields.has_blank_field() {
            return Err(FormError::Validation);
        }

        Ok(())
    }

    fn format_values(&self) -> Result<NewTransaction, FormError> {
        let amount = Amount::from_str(&self.fields.amount)?;
        let date = self.fields.date.trim().to_string();
        parse_display_date(&date)?;

        Ok(NewTransaction {
            description: self.fields.description.clone(),
            amount,
            date
        })
    }

    fn clear_fields(&mut self) {
        self.fields = FormFields::default();
    }
}
