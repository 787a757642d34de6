
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::types::TransactionId;

pub const DEFAULT_STORE_PATH: &str = "dev-finances.json";

/// Records income and expenses and keeps a running balance.
#[derive(Debug, Parser)]
#[command(name = "dev-finances", version)]
pub struct Cli {
    /// Key-value file holding the stored transactions.
    #[arg(long, env = "DEV_FINANCES_STORE", default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,
    /// One of: error, warn, info, debug, trace.
    #[arg(long, default_value = "error")]
    pub log_level: String,
    /// Print amounts without colour.
    #[arg(long)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Option<Command>
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show every transaction and the balance.
    List,
    /// Record a new transaction.
    Add {
        #[arg(long, short)]
        description: String,
        /// Signed decimal amount, negative for expenses.
        #[arg(long, short, allow_hyphen_values = true)]
        amount: String,
        /// Date as YYYY-MM-DD.
        #[arg(long)]
        date: String
    },
    /// Remove a transaction by its identifier.
    Remove {
        id: TransactionId
    }
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }

    pub fn log_level(&self) -> LevelFilter {
        parse_log_level(&self.log_level)
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
