use kobo_shelf_core::{Book, BookFilter};
use kobo_shelf_db::KoboDb;
use kobo_shelf_lib::book_list_line;

use crate::CliError;
use crate::cli_types::ListFilter;

pub(crate) fn run_list(db: &KoboDb, filter: ListFilter) -> Result<(), CliError> {
    let books = db.books(&BookFilter {
        status: filter.status(),
        ..BookFilter::all()
    })?;
    print_numbered(&books);
    Ok(())
}

pub(crate) fn run_author(db: &KoboDb, author: &str) -> Result<(), CliError> {
    let books = db.books(&BookFilter::all().with_author(author))?;
    print_numbered(&books);
    Ok(())
}

fn print_numbered(books: &[Book]) {
    if books.is_empty() {
        log::debug!("No matching books");
    }
    for (i, book) in books.iter().enumerate() {
        log::info!("{}", book_list_line(i, book));
    }
}
