mod table;

use crate::models::{Summary, Transaction};

pub use table::{AmountStyle, BalanceDisplay, TableRow, TableView};

/// Presentation surface for the transaction table and the aggregate slots.
pub trait Renderer {
    /// Empties the table body.
    fn clear(&mut self);
    /// Appends one row for `transaction`, with a removal control bound to its id.
    fn render_transaction(&mut self, transaction: &Transaction);
    /// Writes the formatted income, expense and total figures.
    fn update_aggregates(&mut self, summary: &Summary);
}
