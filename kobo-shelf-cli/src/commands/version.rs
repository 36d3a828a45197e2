use kobo_shelf_db::KoboDb;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_version(db: &KoboDb) -> Result<(), CliError> {
    let version = db.schema_version()?;
    log::info!(
        "DB Version: {}",
        version.if_supports_color(Stdout, |t| t.bold())
    );
    Ok(())
}
