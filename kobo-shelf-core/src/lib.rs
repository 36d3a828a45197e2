//! Domain types shared by the kobo-shelf crates.
//!
//! Books and bookmarks are read-only projections of rows in the device
//! database. Nothing here performs I/O.

pub mod types;
pub mod util;

pub use types::{Book, BookFilter, Bookmark, BookmarkFilter, ReadStatus};
pub use util::{PLACEHOLDER, format_duration, format_reading_time, or_placeholder};
