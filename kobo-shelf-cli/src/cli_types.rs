//! CLI type definitions: the argument struct and the selected action.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use kobo_shelf_core::ReadStatus;

#[derive(Parser)]
#[command(name = "kobo-shelf")]
#[command(
    about = "Get information from a Kobo e-reader database",
    long_about = "Get information from a Kobo e-reader database. The database is stored in \
                  <KOBO DRIVE>/.kobo/KoboReader.sqlite on the device filesystem and is only \
                  ever opened read-only."
)]
#[command(group(
    ArgGroup::new("action")
        .multiple(false)
        .args(["version", "list", "export", "bookmark", "title", "author"])
))]
pub(crate) struct Cli {
    /// Kobo sqlite database file, or the root of a mounted device
    /// (defaults to database.path in settings.toml)
    pub database: Option<PathBuf>,

    /// Show Kobo database version
    #[arg(short, long)]
    pub version: bool,

    /// List books stored in the database
    #[arg(
        short,
        long,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "all",
        value_name = "FILTER"
    )]
    pub list: Option<ListFilter>,

    /// Export all books to a TAB separated text file
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Show bookmarks
    #[arg(short, long)]
    pub bookmark: bool,

    /// Show info for the book(s) whose title contains TEXT
    #[arg(short, long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Show all the books of an author
    #[arg(short, long, value_name = "TEXT")]
    pub author: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(long)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long)]
    pub logfile: Option<PathBuf>,
}

impl Cli {
    /// The selected action, or `None` when no selector flag was given.
    pub fn action(&self) -> Option<Action> {
        if self.version {
            Some(Action::Version)
        } else if let Some(filter) = self.list {
            Some(Action::List(filter))
        } else if self.bookmark {
            Some(Action::Bookmarks)
        } else if let Some(title) = &self.title {
            Some(Action::Title(title.clone()))
        } else if let Some(author) = &self.author {
            Some(Action::Author(author.clone()))
        } else {
            self.export.clone().map(Action::Export)
        }
    }
}

/// One command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Version,
    List(ListFilter),
    Bookmarks,
    Title(String),
    Author(String),
    Export(PathBuf),
}

/// Read-status selection for `--list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ListFilter {
    All,
    Read,
    Unread,
    Progress,
}

impl ListFilter {
    pub fn status(self) -> Option<ReadStatus> {
        match self {
            ListFilter::All => None,
            ListFilter::Read => Some(ReadStatus::Completed),
            ListFilter::Unread => Some(ReadStatus::NotRead),
            ListFilter::Progress => Some(ReadStatus::InProgress),
        }
    }
}
