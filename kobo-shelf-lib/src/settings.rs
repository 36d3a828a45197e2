//! User settings and database path resolution.
//!
//! Settings live in `~/.config/kobo-shelf/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/media/KOBOeReader"
//! ```
//!
//! `path` may name the sqlite file itself or the root of a mounted device.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Location of the database relative to the device root.
pub const KOBO_DB_RELATIVE: &str = ".kobo/KoboReader.sqlite";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Database file or device root used when none is given on the command line.
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Canonical path to the settings file: `~/.config/kobo-shelf/settings.toml`.
    pub fn default_path() -> PathBuf {
        let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config.join("kobo-shelf").join("settings.toml")
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from the default location, falling back to defaults
    /// (with a warning) if the file can't be used.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Ignoring settings: {}", e);
            Self::default()
        })
    }
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `database.path` from settings
///
/// A directory is taken as a device root and resolved to
/// `<root>/.kobo/KoboReader.sqlite`.
pub fn resolve_database_path(cli_override: Option<PathBuf>, settings: &Settings) -> Option<PathBuf> {
    let path = cli_override.or_else(|| settings.database.path.clone())?;
    let resolved = if path.is_dir() {
        path.join(KOBO_DB_RELATIVE)
    } else {
        path
    };
    log::debug!("Using database {}", resolved.display());
    Some(resolved)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
