use std::path::Path;

use kobo_shelf_core::BookFilter;
use kobo_shelf_db::KoboDb;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Export every eligible book, unfiltered, in title order.
pub(crate) fn run_export(db: &KoboDb, path: &Path) -> Result<(), CliError> {
    let books = db.books(&BookFilter::all())?;
    kobo_shelf_lib::export_books(&books, path)?;
    log::info!(
        "database content exported to file {}.",
        path.display().if_supports_color(Stdout, |t| t.green())
    );
    Ok(())
}
