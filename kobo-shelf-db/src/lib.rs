//! Read-only access to the Kobo device database.
//!
//! Opens `KoboReader.sqlite` without write access (via rusqlite with the
//! bundled feature) and maps `content` and `Bookmark` rows into the domain
//! types from `kobo-shelf-core`.

pub mod error;
pub mod queries;
pub mod source;

pub use error::DbError;
pub use queries::{escape_like, list_bookmarks, list_books};
pub use source::{KoboDb, schema_version};
