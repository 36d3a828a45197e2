//! kobo-shelf CLI
//!
//! Command-line interface for inspecting a Kobo e-reader database.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use kobo_shelf_db::KoboDb;
use kobo_shelf_lib::{Settings, resolve_database_path};

use crate::cli_types::{Action, Cli};
pub(crate) use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref());

    let Some(action) = cli.action() else {
        println!("{}", Cli::command().render_usage());
        return;
    };

    if let Err(e) = run(cli.database, action) {
        log::error!("{}", e);
        log::logger().flush();
        std::process::exit(1);
    }
}

/// Resolve and open the database, run one action, and release the handle.
fn run(database: Option<PathBuf>, action: Action) -> Result<(), CliError> {
    let settings = Settings::load();
    let path = resolve_database_path(database, &settings).ok_or_else(|| CliError::NoDatabase {
        settings: Settings::default_path(),
    })?;

    let db = KoboDb::open(&path)?;
    let result = commands::dispatch(&db, action);
    db.close();
    result
}
