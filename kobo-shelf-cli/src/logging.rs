//! Console logger: command output goes through `log::info!` to stdout,
//! diagnostics go to stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    logfile: Option<Mutex<File>>,
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let line = match record.level() {
            Level::Info => message,
            Level::Warn => format!(
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
                message
            ),
            Level::Error => format!(
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                message
            ),
            Level::Debug | Level::Trace => format!(
                "{} {}",
                "debug:".if_supports_color(Stderr, |t| t.dimmed()),
                message
            ),
        };
        let line = if self.timestamps && record.level() != Level::Info {
            format!("[{}] {}", chrono::Local::now().format("%H:%M:%S%.3f"), line)
        } else {
            line
        };

        // Write errors (e.g. a closed pipe) are dropped.
        let _ = if record.level() == Level::Info {
            writeln!(io::stdout().lock(), "{}", line)
        } else {
            writeln!(io::stderr().lock(), "{}", line)
        };

        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        if let Some(file) = &self.logfile {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the logger. `verbose` wins over `quiet` when both are set.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut open_error = None;
    let logfile = logfile.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| open_error = Some(format!("{}: {}", path.display(), e)))
            .ok()
    });

    let logger = CliLogger {
        level,
        timestamps: verbose,
        logfile: logfile.map(Mutex::new),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }

    if let Some(err) = open_error {
        log::warn!("Could not open log file {}", err);
    }
}
