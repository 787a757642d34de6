//! Personal ledger of incomes and expenses kept in a JSON key-value file.
//!
//! The library holds the ledger model, its persistence and the text table it
//! is rendered to; the `dev-finances` binary wires them to a command line.

pub mod app;
pub mod config;
pub mod form;
pub mod formatter;
pub mod models;
pub mod render;
pub mod storage;
pub mod types;
