//! Reporting, export and settings for kobo-shelf.
//!
//! Everything here consumes domain records from `kobo-shelf-core`; none of it
//! touches the device database.

pub mod display;
pub mod export;
pub mod settings;

pub use display::{RULE, book_info_lines, book_list_line, bookmark_lines};
pub use export::{EXPORT_COLUMNS, ExportError, export_books, write_books_tsv};
pub use settings::{KOBO_DB_RELATIVE, Settings, SettingsError, resolve_database_path};
