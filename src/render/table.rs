use crate::formatter::{format_currency, parse_display_date};
use crate::models::{Summary, Transaction};
use crate::render::Renderer;
use crate::types::{Amount, TransactionId};
use colored::Colorize;
use std::fmt;
use std::fmt::{Display, Formatter};

const HEADERS: [&str; 4] = ["ID", "Description", "Amount", "Date"];
const COLUMN_GAP: &str = "  ";
const EMPTY_MESSAGE: &str = "No transactions yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountStyle {
    Income,
    Expense
}

impl AmountStyle {
    fn for_amount(amount: Amount) -> Self {
        if amount.is_positive() {
            AmountStyle::Income
        } else {
            AmountStyle::Expense
        }
    }
}

/// One rendered table row. `remove_id` is the removal control's target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub remove_id: TransactionId,
    pub description: String,
    pub amount: String,
    pub style: AmountStyle,
    pub date: String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceDisplay {
    pub income: String,
    pub expense: String,
    pub total: String
}

impl Default for BalanceDisplay {
    fn default() -> Self {
        let zero = format_currency(Amount::ZERO);
        Self {
            income: zero.clone(),
            expense: zero.clone(),
            total: zero
        }
    }
}

/// Terminal table of transactions followed by the balance block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<TableRow>,
    balance: BalanceDisplay,
    color: bool
}

impl TableView {
    pub fn new(color: bool) -> Self {
        Self {
            rows: Vec::new(),
            balance: BalanceDisplay::default(),
            color
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn balance(&self) -> &BalanceDisplay {
        &self.balance
    }

    pub fn render(&self) -> String {
        let cells: Vec<[String; 4]> = self.rows.iter()
            .map(|row| [row.remove_id.to_string(), row.description.clone(), row.amount.clone(), row.date.clone()])
            .collect();

        let widths = compute_widths(&cells);
        let mut out = String::new();

        out.push_str(&render_line(&HEADERS.map(str::to_string), &widths, None, false));
        out.push('\n');
        out.push_str(&render_line(&widths.map(|width| "-".repeat(width)), &widths, None, false));
        out.push('\n');

        if self.rows.is_empty() {
            out.push_str(EMPTY_MESSAGE);
            out.push('\n');
        }

        for (row, cells) in self.rows.iter().zip(&cells) {
            out.push_str(&render_line(cells, &widths, Some(row.style), self.color));
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&format!("Income:   {}\n", self.balance.income));
        out.push_str(&format!("Expenses: {}\n", self.balance.expense));
        out.push_str(&format!("Total:    {}\n", self.balance.total));

        out
    }
}

impl Renderer for TableView {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn render_transaction(&mut self, transaction: &Transaction) {
        let date = parse_display_date(&transaction.date).unwrap_or_else(|_| transaction.date.clone());

        self.rows.push(TableRow {
            remove_id: transaction.id,
            description: transaction.description.clone(),
            amount: format_currency(transaction.amount),
            style: AmountStyle::for_amount(transaction.amount),
            date
        });
    }

    fn update_aggregates(&mut self, summary: &Summary) {
        self.balance = BalanceDisplay {
            income: format_currency(summary.incomes),
            expense: format_currency(summary.expenses),
            total: format_currency(summary.total)
        };
    }
}

impl Display for TableView {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render())
    }
}

fn compute_widths(cells: &[[String; 4]]) -> [usize; 4] {
    let mut widths = HEADERS.map(|header| header.chars().count());

    for row in cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    widths
}

// Amounts are right aligned; colour is applied after padding so escape codes
// do not count towards the column width.
fn render_line(cells: &[String; 4], widths: &[usize; 4], style: Option<AmountStyle>, color: bool) -> String {
    let rendered: Vec<String> = cells.iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, &width))| {
            let padded = if column == 2 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            };

            match (style, color, column) {
                (Some(AmountStyle::Income), true, 2) => padded.green().to_string(),
                (Some(AmountStyle::Expense), true, 2) => padded.red().to_string(),
                _ => padded
            }
        })
        .collect();

    rendered.join(COLUMN_GAP).trim_end().to_string()
}
