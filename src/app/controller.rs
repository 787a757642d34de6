use crate::app::errors::AppError;
use crate::models::{Ledger, NewTransaction, Transaction};
use crate::render::Renderer;
use crate::storage::Storage;
use crate::types::TransactionId;
use tracing::{debug, info, warn};

/// Owns the ledger together with its store and renderer.
///
/// Every mutation goes through `&mut self` and is followed by a full
/// [`reload`](App::reload): the table is cleared and redrawn, aggregates are
/// recomputed and the whole list is written back to the store. Nothing is
/// diffed, so each mutation costs one pass over the ledger for rendering and
/// one full serialization. When the write fails the mutation is rolled back
/// and redrawn, so the ledger, the view and the store never disagree.
pub struct App<S: Storage, R: Renderer> {
    ledger: Ledger,
    storage: S,
    renderer: R
}

impl<S: Storage, R: Renderer> App<S, R> {
    /// Loads the ledger from `storage` and draws it for the first time.
    ///
    /// # Errors
    /// Returns `AppError::Storage` when the stored list cannot be read or
    /// written back.
    pub fn start(storage: S, renderer: R) -> Result<Self, AppError> {
        let ledger = Ledger::from_transactions(storage.load()?);

        info!("Ledger started with [{}] transactions", ledger.len());

        let mut app = Self {
            ledger,
            storage,
            renderer
        };

        app.init()?;

        Ok(app)
    }

    /// Renders every transaction, updates the aggregates and persists the list.
    ///
    /// Assumes the table body is already empty.
    pub fn init(&mut self) -> Result<(), AppError> {
        self.draw();
        self.storage.save(self.ledger.transactions())?;

        Ok(())
    }

    pub fn reload(&mut self) -> Result<(), AppError> {
        debug!("Reloading ledger view");

        self.renderer.clear();
        self.init()
    }

    /// Appends a transaction, then redraws and persists.
    ///
    /// # Errors
    /// Returns `AppError::Ledger` when the ledger refuses the transaction and
    /// `AppError::Storage` when it cannot be persisted; the ledger and view are
    /// unchanged in both cases.
    pub fn add(&mut self, transaction: NewTransaction) -> Result<TransactionId, AppError> {
        let previous = self.ledger.clone();
        let transaction_id = self.ledger.add(transaction)?;

        self.commit(previous)?;

        info!("Transaction [{transaction_id}] added");

        Ok(transaction_id)
    }

    /// Removes the transaction with `transaction_id`.
    ///
    /// # Errors
    /// Returns `AppError::Ledger` for an unknown identifier; nothing is
    /// redrawn or persisted in that case. A failed write is rolled back like
    /// in [`add`](App::add).
    pub fn remove(&mut self, transaction_id: TransactionId) -> Result<Transaction, AppError> {
        let previous = self.ledger.clone();
        let transaction = self.ledger.remove(transaction_id)?;

        self.commit(previous)?;

        info!("Transaction [{transaction_id}] removed");

        Ok(transaction)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn draw(&mut self) {
        for transaction in self.ledger.iter() {
            self.renderer.render_transaction(transaction);
        }

        self.renderer.update_aggregates(&self.ledger.summary());
    }

    /// Reloads after a mutation, restoring `previous` if the write fails.
    fn commit(&mut self, previous: Ledger) -> Result<(), AppError> {
        if let Err(error) = self.reload() {
            warn!("Persisting the ledger failed, rolling back: {error}");

            self.ledger = previous;
            self.renderer.clear();
            self.draw();

            return Err(error);
        }

        Ok(())
    }
}
