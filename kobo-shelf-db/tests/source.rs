mod common;

use std::fs;

use kobo_shelf_core::*;
use kobo_shelf_db::*;
use rusqlite::Connection;
use tempfile::TempDir;

use common::{SCHEMA_VERSION, fixture_file};

#[test]
fn open_and_read_version() {
    let (_dir, path) = fixture_file();
    let db = KoboDb::open(&path).unwrap();
    assert_eq!(db.path(), path.as_path());
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
    db.close();
}

#[test]
fn open_nonexistent_is_connection_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.sqlite");
    let err = KoboDb::open(&path).unwrap_err();
    assert!(matches!(err, DbError::Connection { .. }));
    // Opening must never create the file
    assert!(!path.exists());
}

#[test]
fn open_directory_is_connection_error() {
    let dir = TempDir::new().unwrap();
    let err = KoboDb::open(dir.path()).unwrap_err();
    assert!(matches!(err, DbError::Connection { .. }));
}

#[test]
fn open_non_database_is_connection_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "this is a plain text file, not a database\n".repeat(64)).unwrap();
    let err = KoboDb::open(&path).unwrap_err();
    assert!(matches!(err, DbError::Connection { .. }), "got {err}");
}

#[test]
fn missing_version_table_is_query_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("other.sqlite");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE content (ContentID TEXT);").unwrap();
    conn.close().unwrap();

    let db = KoboDb::open(&path).unwrap();
    let err = db.schema_version().unwrap_err();
    assert!(matches!(err, DbError::Query { action: "getting version", .. }));
    assert!(err.to_string().starts_with("Error getting version"));
    db.close();
}

#[test]
fn empty_version_table_is_query_error() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE dbversion (version INTEGER);").unwrap();
    let err = schema_version(&conn).unwrap_err();
    assert!(matches!(err, DbError::Query { .. }));
}

#[test]
fn writes_are_rejected() {
    let (_dir, path) = fixture_file();
    let db = KoboDb::open(&path).unwrap();
    let result = db
        .connection()
        .execute("UPDATE dbversion SET version = 1", []);
    assert!(result.is_err());
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
}

#[test]
fn queries_through_handle() {
    let (_dir, path) = fixture_file();
    let db = KoboDb::open(&path).unwrap();
    let books = db.books(&BookFilter::all()).unwrap();
    assert_eq!(books.len(), common::ALL_TITLES.len());
    let bookmarks = db.bookmarks(&BookmarkFilter::default()).unwrap();
    assert_eq!(bookmarks.len(), 3);
    db.close();
}

#[test]
fn reopen_after_close() {
    let (_dir, path) = fixture_file();
    let db = KoboDb::open(&path).unwrap();
    db.close();
    let db = KoboDb::open(&path).unwrap();
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
}
