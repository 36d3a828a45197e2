use std::path::PathBuf;

use kobo_shelf_db::DbError;
use kobo_shelf_lib::ExportError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Opening or querying the device database failed
    #[error("{0}")]
    Database(#[from] DbError),

    /// Writing the export file failed
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// No database path on the command line or in settings
    #[error("No database given: pass a path or set database.path in {}", settings.display())]
    NoDatabase { settings: PathBuf },
}
