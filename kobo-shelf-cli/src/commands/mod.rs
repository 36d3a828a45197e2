pub(crate) mod bookmarks;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod title;
pub(crate) mod version;

use kobo_shelf_db::KoboDb;

use crate::CliError;
use crate::cli_types::Action;

pub(crate) fn dispatch(db: &KoboDb, action: Action) -> Result<(), CliError> {
    log::debug!("Running {:?} against {}", action, db.path().display());
    match action {
        Action::Version => version::run_version(db),
        Action::List(filter) => list::run_list(db, filter),
        Action::Bookmarks => bookmarks::run_bookmarks(db),
        Action::Title(title) => title::run_title(db, &title),
        Action::Author(author) => list::run_author(db, &author),
        Action::Export(path) => export::run_export(db, &path),
    }
}
