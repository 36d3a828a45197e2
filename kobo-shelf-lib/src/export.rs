//! Tab-separated export of the book list.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use kobo_shelf_core::{Book, PLACEHOLDER, or_placeholder};
use thiserror::Error;

/// Header row of the export file.
pub const EXPORT_COLUMNS: [&str; 9] = [
    "title",
    "author",
    "mime_type",
    "language",
    "filepath",
    "filesize",
    "read_status",
    "last_read_date",
    "percent_read",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to write record: {0}")]
    Csv(#[from] csv::Error),
}

/// Write `books` as tab-separated text: header row, then one row per book
/// in the given order.
///
/// Values are never quoted. Absent values become `-`, and tabs or line
/// breaks inside a value become spaces so each line has exactly
/// [`EXPORT_COLUMNS`]`.len()` fields.
pub fn write_books_tsv<W: Write>(books: &[Book], writer: W) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(EXPORT_COLUMNS)?;
    for book in books {
        wtr.write_record(book_record(book).iter().map(|field| sanitize(field)))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export `books` to a new file at `path`, replacing any existing file.
pub fn export_books(books: &[Book], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_books_tsv(books, io::BufWriter::new(file))?;
    log::debug!("Wrote {} book(s) to {}", books.len(), path.display());
    Ok(())
}

fn book_record(book: &Book) -> [String; 9] {
    [
        text_or_placeholder(&book.title),
        text_or_placeholder(&book.author),
        text_or_placeholder(&book.mime_type),
        or_placeholder(book.language.as_deref()),
        book.filepath.clone(),
        or_placeholder(book.filesize),
        book.read_status.label().to_string(),
        or_placeholder(book.last_read_date.as_deref()),
        or_placeholder(book.percent_read),
    ]
}

fn text_or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

fn sanitize(field: &str) -> String {
    field.replace(['\t', '\r', '\n'], " ")
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
