//! Read queries for books and bookmarks.
//!
//! User-supplied title and author text is always bound as a parameter and
//! escaped, so it matches as a literal substring.

use kobo_shelf_core::{Book, BookFilter, Bookmark, BookmarkFilter, ReadStatus};
use rusqlite::types::{ToSql, ValueRef};
use rusqlite::{Connection, Row};

use crate::error::DbError;

const BOOKS: &str = "getting books";
const BOOKMARKS: &str = "getting bookmarks";

/// Restricts `content` to top-level, downloaded, file-backed books.
///
/// `IsDownloaded` is a text `'true'` on some firmware and an integer `1` on others.
const ELIGIBLE_BOOK: &str = "BookID IS NULL
       AND ContentType = 6
       AND IsDownloaded IN ('true', 1)
       AND ContentID LIKE 'file%'";

// ── Books ───────────────────────────────────────────────────────────────────

/// List eligible books matching `filter`, ordered by title.
///
/// Returns an empty list when nothing matches.
pub fn list_books(conn: &Connection, filter: &BookFilter) -> Result<Vec<Book>, DbError> {
    let mut sql = format!(
        "SELECT Title, Attribution, MimeType, ReadStatus, ContentID,
                DateLastRead, ___PercentRead, TimeSpentReading, ___FileSize, Language
         FROM content
         WHERE {ELIGIBLE_BOOK}"
    );
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(title) = &filter.title {
        values.push(Box::new(contains_pattern(title)));
        sql.push_str(&format!(" AND Title LIKE ?{} ESCAPE '\\'", values.len()));
    }
    if let Some(author) = &filter.author {
        values.push(Box::new(contains_pattern(author)));
        sql.push_str(&format!(" AND Attribution LIKE ?{} ESCAPE '\\'", values.len()));
    }
    if let Some(status) = filter.status {
        match status.code() {
            Some(code) => {
                values.push(Box::new(code));
                sql.push_str(&format!(" AND ReadStatus = ?{}", values.len()));
            }
            // Unknown covers every code the firmware doesn't define.
            None => sql.push_str(" AND (ReadStatus IS NULL OR ReadStatus NOT IN (0, 1, 2))"),
        }
    }
    sql.push_str(" ORDER BY Title, ContentID");

    log::debug!("Listing books with {:?}", filter);
    let books = query_all(conn, &sql, &values, row_to_book).map_err(DbError::query(BOOKS))?;
    log::debug!("{} book(s) matched", books.len());
    Ok(books)
}

// ── Bookmarks ───────────────────────────────────────────────────────────────

/// List bookmarks joined with their owning content item.
///
/// Bookmarks whose `VolumeID` has no matching `content` row are left out.
/// Ordered by book title, then creation date, then bookmark id.
pub fn list_bookmarks(
    conn: &Connection,
    filter: &BookmarkFilter,
) -> Result<Vec<Bookmark>, DbError> {
    let mut sql = String::from(
        "SELECT b.BookmarkID, c.Title, c.Attribution, b.DateCreated, b.DateModified,
                b.Type, b.Text, b.Annotation
         FROM content c
         INNER JOIN Bookmark b ON c.ContentID = b.VolumeID
         WHERE 1 = 1",
    );
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(title) = &filter.title {
        values.push(Box::new(contains_pattern(title)));
        sql.push_str(&format!(" AND c.Title LIKE ?{} ESCAPE '\\'", values.len()));
    }
    if let Some(author) = &filter.author {
        values.push(Box::new(contains_pattern(author)));
        sql.push_str(&format!(" AND c.Attribution LIKE ?{} ESCAPE '\\'", values.len()));
    }
    sql.push_str(" ORDER BY c.Title, b.DateCreated, b.BookmarkID");

    let bookmarks =
        query_all(conn, &sql, &values, row_to_bookmark).map_err(DbError::query(BOOKMARKS))?;
    log::debug!("{} bookmark(s) found", bookmarks.len());
    Ok(bookmarks)
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Escape `LIKE` metacharacters (`%`, `_` and the `\` escape itself).
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like(value))
}

fn query_all<T>(
    conn: &Connection,
    sql: &str,
    values: &[Box<dyn ToSql>],
    map: fn(&Row<'_>) -> rusqlite::Result<T>,
) -> rusqlite::Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let rows = stmt.query_map(params.as_slice(), map)?;
    rows.collect()
}

fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        title: text_or_empty(row, 0)?,
        author: text_or_empty(row, 1)?,
        mime_type: text_or_empty(row, 2)?,
        read_status: status_at(row, 3)?,
        filepath: row.get(4)?,
        last_read_date: row.get(5)?,
        percent_read: row.get(6)?,
        time_spent_reading_sec: row.get(7)?,
        filesize: row.get(8)?,
        language: row.get(9)?,
    })
}

fn row_to_bookmark(row: &Row<'_>) -> rusqlite::Result<Bookmark> {
    Ok(Bookmark {
        id: row.get(0)?,
        book_title: text_or_empty(row, 1)?,
        book_author: text_or_empty(row, 2)?,
        date_created: row.get(3)?,
        date_modified: row.get(4)?,
        kind: text_or_empty(row, 5)?,
        text: row.get(6)?,
        annotation: row.get(7)?,
    })
}

/// Non-integer storage (TEXT, REAL, BLOB) counts as an unknown status.
fn status_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<ReadStatus> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Integer(code) => ReadStatus::from_raw(Some(code)),
        _ => ReadStatus::Unknown,
    })
}

fn text_or_empty(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}
