use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the device database layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// The file is missing, unreadable, not a database, or cannot be opened read-only.
    #[error("Error connecting database {}: {reason}", path.display())]
    Connection { path: PathBuf, reason: String },

    /// A lookup failed: missing table or column, bad row, or I/O during iteration.
    #[error("Error {action}: {source}")]
    Query {
        action: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl DbError {
    pub fn connection(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Connection {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns a closure that wraps a rusqlite error as a query failure.
    pub(crate) fn query(action: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Query { action, source }
    }
}
