//! Console rendering for books and bookmarks.
//!
//! Produces plain lines (no ANSI colors) so the CLI decides how to emit them
//! and tests can compare them directly.

use kobo_shelf_core::{Book, Bookmark, PLACEHOLDER, format_reading_time, or_placeholder};

/// Separator printed after each book or bookmark block.
pub const RULE: &str = "--------------------------------------------------------------------------------";

/// A numbered `"{n}) title - author"` line; `index` is zero-based.
pub fn book_list_line(index: usize, book: &Book) -> String {
    format!("{}) {} - {}", index + 1, book.title, book.author)
}

/// Full information block for one book, ending with [`RULE`].
pub fn book_info_lines(book: &Book) -> Vec<String> {
    vec![
        format!("Title: {}", book.title),
        format!("Author: {}", book.author),
        format!("Mime type: {}", book.mime_type),
        format!("Language: {}", or_placeholder(book.language.as_deref())),
        format!("File: {}", book.filepath),
        format!(
            "Size: {}",
            book.filesize
                .map_or_else(|| PLACEHOLDER.to_string(), |n| format!("{} bytes", n))
        ),
        format!("Read status: {}", book.read_status),
        format!(
            "Last read date: {}",
            or_placeholder(book.last_read_date.as_deref())
        ),
        format!(
            "Percent read: {}",
            book.percent_read
                .map_or_else(|| PLACEHOLDER.to_string(), |p| format!("{}%", p))
        ),
        format!(
            "Time spent reading: {}",
            format_reading_time(book.time_spent_reading_sec)
        ),
        RULE.to_string(),
    ]
}

/// Block for one bookmark, ending with [`RULE`].
///
/// The text and annotation lines are left out entirely when empty.
pub fn bookmark_lines(bookmark: &Bookmark) -> Vec<String> {
    let mut lines = vec![
        format!("Bookmark ID: {}", bookmark.id),
        format!("Type: {}", bookmark.kind),
        format!("Book title: {}", bookmark.book_title),
        format!("Book author: {}", bookmark.book_author),
        format!(
            "Date created: {}",
            or_placeholder(bookmark.date_created.as_deref())
        ),
        format!(
            "Date modified: {}",
            or_placeholder(bookmark.date_modified.as_deref())
        ),
    ];
    if let Some(text) = non_empty(&bookmark.text) {
        lines.push(format!("Text: \"{}\"", text));
    }
    if let Some(annotation) = non_empty(&bookmark.annotation) {
        lines.push(format!("Annotation: \"{}\"", annotation));
    }
    lines.push(RULE.to_string());
    lines
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
