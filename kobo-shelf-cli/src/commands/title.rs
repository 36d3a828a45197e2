use kobo_shelf_core::BookFilter;
use kobo_shelf_db::KoboDb;
use kobo_shelf_lib::book_info_lines;

use crate::CliError;

pub(crate) fn run_title(db: &KoboDb, title: &str) -> Result<(), CliError> {
    for book in db.books(&BookFilter::all().with_title(title))? {
        for line in book_info_lines(&book) {
            log::info!("{}", line);
        }
    }
    Ok(())
}
