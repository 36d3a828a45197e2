//! Read-only connection handle for `KoboReader.sqlite`.

use std::path::{Path, PathBuf};

use kobo_shelf_core::{Book, BookFilter, Bookmark, BookmarkFilter};
use rusqlite::{Connection, OpenFlags};

use crate::error::DbError;
use crate::queries;

/// An open, read-only device database.
///
/// The connection is opened with `SQLITE_OPEN_READ_ONLY`, so SQLite itself
/// rejects any write. Dropping the handle releases the file; [`KoboDb::close`]
/// does the same but reports close failures to the log.
#[derive(Debug)]
pub struct KoboDb {
    path: PathBuf,
    conn: Connection,
}

impl KoboDb {
    /// Open the database at `path` without write access.
    ///
    /// Never creates, writes, or migrates the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DbError::connection(path, "file not found"));
        }
        if !path.is_file() {
            return Err(DbError::connection(path, "not a regular file"));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| DbError::connection(path, e))?;

        // SQLite reads the header lazily; force it so a non-database file fails here.
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| DbError::connection(path, e))?;

        log::debug!("Opened {} read-only", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    /// Release the connection. Never fails; close errors are only logged.
    pub fn close(self) {
        let path = self.path;
        match self.conn.close() {
            Ok(()) => log::debug!("Closed {}", path.display()),
            Err((_conn, e)) => log::warn!("Failed to close {} cleanly: {}", path.display(), e),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the underlying connection for the free query functions.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The schema revision stored in `dbversion`.
    pub fn schema_version(&self) -> Result<i64, DbError> {
        schema_version(&self.conn)
    }

    /// Eligible books matching `filter`, ordered by title.
    pub fn books(&self, filter: &BookFilter) -> Result<Vec<Book>, DbError> {
        queries::list_books(&self.conn, filter)
    }

    /// Bookmarks whose owning book still exists and matches `filter`.
    pub fn bookmarks(&self, filter: &BookmarkFilter) -> Result<Vec<Bookmark>, DbError> {
        queries::list_bookmarks(&self.conn, filter)
    }
}

/// Read the schema version marker.
///
/// Fails with [`DbError::Query`] when the `dbversion` table or its row is
/// missing, which means the file is not a device database.
pub fn schema_version(conn: &Connection) -> Result<i64, DbError> {
    conn.query_row("SELECT version FROM dbversion", [], |row| row.get(0))
        .map_err(DbError::query("getting version"))
}
