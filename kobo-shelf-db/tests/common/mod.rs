//! Fixture database with the subset of the firmware schema the queries read.

#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

pub const SCHEMA_VERSION: i64 = 174;

pub const SCHEMA_SQL: &str = r#"
CREATE TABLE dbversion (version INTEGER);

CREATE TABLE content (
    ContentID TEXT NOT NULL PRIMARY KEY,
    ContentType TEXT NOT NULL,
    MimeType TEXT NOT NULL,
    BookID TEXT,
    Title TEXT,
    Attribution TEXT,
    DateLastRead TEXT,
    ReadStatus INT,
    ___FileSize INT,
    ___PercentRead INT,
    IsDownloaded BOOL,
    TimeSpentReading INT,
    Language TEXT
);

CREATE TABLE Bookmark (
    BookmarkID TEXT NOT NULL PRIMARY KEY,
    VolumeID TEXT NOT NULL,
    ContentID TEXT,
    Text TEXT,
    Annotation TEXT,
    DateCreated TEXT,
    DateModified TEXT,
    Type TEXT
);
"#;

const DATA_SQL: &str = r#"
INSERT INTO dbversion (version) VALUES (174);

INSERT INTO content VALUES
    ('file:///mnt/onboard/dune.epub', '6', 'application/epub+zip', NULL,
     'Dune', 'Frank Herbert', '2024-01-05T21:10:00Z', 2, 1000, 100, 'true', 36000, 'en'),
    ('file:///mnt/onboard/earthsea.kepub.epub', '6', 'application/x-kobo-epub+zip', NULL,
     'A Wizard of Earthsea', 'Ursula K. Le Guin', '2024-02-11T08:00:00Z', 1, 2000, 42, 1, 3661, 'en'),
    ('file:///mnt/onboard/neuromancer.epub', '6', 'application/epub+zip', NULL,
     'Neuromancer', 'William Gibson', NULL, 0, 3000, NULL, 'true', NULL, NULL),
    ('file:///mnt/onboard/pure_fun.epub', '6', 'application/epub+zip', NULL,
     '100% Pure_Fun', 'O''Brien "Quote"', NULL, 7, 4000, 5, 'true', 0, 'fr'),
    ('file:///mnt/onboard/1000.epub', '6', 'application/epub+zip', NULL,
     '1000 Pure Fun', 'OBrien Quote', NULL, NULL, 5000, NULL, 1, NULL, NULL),
    ('file:///mnt/onboard/dune.epub#chapter1', '9', 'application/xhtml+xml', 'file:///mnt/onboard/dune.epub',
     'Dune Chapter 1', 'Frank Herbert', NULL, 0, 10, NULL, 'true', NULL, 'en'),
    ('file:///mnt/onboard/cloud.epub', '6', 'application/epub+zip', NULL,
     'Cloud Only', 'Nobody', NULL, 0, 100, NULL, 'false', NULL, NULL),
    ('b7c2f3a4-store-entitlement', '6', 'application/x-kobo-epub+zip', NULL,
     'Store Preview', 'Nobody', NULL, 0, 100, NULL, 'true', NULL, NULL),
    ('file:///mnt/onboard/manual.pdf', '899', 'application/pdf', NULL,
     'Device Manual', 'Kobo', NULL, 0, 100, NULL, 'true', NULL, NULL);

INSERT INTO Bookmark (BookmarkID, VolumeID, ContentID, Text, Annotation, DateCreated, DateModified, Type) VALUES
    ('bm-1', 'file:///mnt/onboard/dune.epub', 'file:///mnt/onboard/dune.epub#chapter1',
     'Fear is the mind-killer.', 'classic', '2024-01-02T10:00:00Z', '2024-01-03T10:00:00Z', 'note'),
    ('bm-2', 'file:///mnt/onboard/earthsea.kepub.epub', NULL,
     'To light a candle is to cast a shadow.', NULL, '2024-02-01T09:00:00Z', NULL, 'highlight'),
    ('bm-3', 'file:///mnt/onboard/dune.epub', NULL,
     NULL, '', '2024-01-01T12:00:00Z', NULL, 'dogear'),
    ('bm-orphan', 'file:///mnt/onboard/deleted.epub', NULL,
     'Gone but not forgotten', NULL, '2023-12-31T00:00:00Z', NULL, 'highlight');
"#;

/// Titles of every eligible book, in the order `list_books` returns them.
pub const ALL_TITLES: [&str; 5] = [
    "100% Pure_Fun",
    "1000 Pure Fun",
    "A Wizard of Earthsea",
    "Dune",
    "Neuromancer",
];

pub fn seed(conn: &Connection) {
    conn.execute_batch(SCHEMA_SQL).unwrap();
    conn.execute_batch(DATA_SQL).unwrap();
}

pub fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    seed(&conn);
    conn
}

/// Write the fixture to a file and close the writer, returning its path.
pub fn fixture_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("KoboReader.sqlite");
    let conn = Connection::open(&path).unwrap();
    seed(&conn);
    conn.close().unwrap();
    (dir, path)
}
