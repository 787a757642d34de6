use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use dev_finances::app::App;
use dev_finances::config::{Cli, Command};
use dev_finances::form::FormController;
use dev_finances::render::TableView;
use dev_finances::storage::{FileKeyValueStore, TransactionStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level());

    let storage = TransactionStore::new(FileKeyValueStore::new(&cli.store));
    info!("Using store at [{}]", storage.backend().path().display());

    let mut app = App::start(storage, TableView::new(!cli.no_color))?;
    let mut output = BufWriter::new(stdout().lock());

    match cli.command() {
        Command::List => {}
        Command::Add { description, amount, date } => {
            let mut form = FormController::new();
            form.open();
            form.fill(description, amount, date);

            let transaction_id = form.submit(&mut app)?;
            writeln!(output, "Added transaction {transaction_id}")?;
        }
        Command::Remove { id } => {
            let transaction = app.remove(id)?;
            writeln!(output, "Removed transaction {id} ({})", transaction.description)?;
        }
    }

    write!(output, "{}", app.renderer())?;
    output.flush()?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the table, so diagnostics go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
