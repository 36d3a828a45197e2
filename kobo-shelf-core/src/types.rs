//! Data model types for the device catalog.
//!
//! These mirror the handful of columns the firmware keeps in its `content`
//! and `Bookmark` tables. They are rebuilt on every query and never written
//! back.

use std::fmt;

use serde::Serialize;

// ── Read Status ─────────────────────────────────────────────────────────────

/// Reading progress of a book, derived from the raw `ReadStatus` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadStatus {
    NotRead,
    InProgress,
    Completed,
    /// Any code the firmware stores outside 0..=2, or no code at all.
    Unknown,
}

impl ReadStatus {
    /// Statuses that have a raw code in the database.
    pub const KNOWN: [ReadStatus; 3] = [
        ReadStatus::NotRead,
        ReadStatus::InProgress,
        ReadStatus::Completed,
    ];

    /// Map a raw `ReadStatus` column value to a status. Total over all inputs.
    pub fn from_raw(raw: Option<i64>) -> Self {
        match raw {
            Some(0) => ReadStatus::NotRead,
            Some(1) => ReadStatus::InProgress,
            Some(2) => ReadStatus::Completed,
            _ => ReadStatus::Unknown,
        }
    }

    /// The raw column value for this status, `None` for [`ReadStatus::Unknown`].
    pub fn code(self) -> Option<i64> {
        match self {
            ReadStatus::NotRead => Some(0),
            ReadStatus::InProgress => Some(1),
            ReadStatus::Completed => Some(2),
            ReadStatus::Unknown => None,
        }
    }

    /// Human-readable label used in console output and exports.
    pub fn label(self) -> &'static str {
        match self {
            ReadStatus::NotRead => "not read",
            ReadStatus::InProgress => "in progress",
            ReadStatus::Completed => "completed",
            ReadStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Book ────────────────────────────────────────────────────────────────────

/// A top-level, downloaded, file-backed book known to the device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub title: String,
    /// Attribution string; may list several authors.
    pub author: String,
    pub mime_type: String,
    pub read_status: ReadStatus,
    /// Content identifier, a `file://` path on the device.
    pub filepath: String,
    pub last_read_date: Option<String>,
    /// Percentage read, 0 to 100.
    pub percent_read: Option<f64>,
    /// Seconds spent reading. `None` means the firmware never recorded it,
    /// which is not the same as zero.
    pub time_spent_reading_sec: Option<i64>,
    /// File size in bytes, if the firmware recorded one.
    pub filesize: Option<i64>,
    pub language: Option<String>,
}

// ── Bookmark ────────────────────────────────────────────────────────────────

/// A user bookmark, highlight or note, joined with its owning book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub id: String,
    pub book_title: String,
    pub book_author: String,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
    /// Firmware-defined kind, e.g. `highlight`, `note` or `dogear`.
    pub kind: String,
    /// Highlighted passage.
    pub text: Option<String>,
    /// User note attached to the passage.
    pub annotation: Option<String>,
}

// ── Filters ─────────────────────────────────────────────────────────────────

/// Optional restrictions for a book listing. All set fields must match.
///
/// Title and author match as literal substrings; wildcard characters in the
/// value carry no special meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub status: Option<ReadStatus>,
}

impl BookFilter {
    /// A filter that accepts every eligible book.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_status(mut self, status: ReadStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Optional restrictions on the book that owns a bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkFilter {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookmarkFilter {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
