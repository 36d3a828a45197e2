use kobo_shelf_core::BookmarkFilter;
use kobo_shelf_db::KoboDb;
use kobo_shelf_lib::bookmark_lines;

use crate::CliError;

pub(crate) fn run_bookmarks(db: &KoboDb) -> Result<(), CliError> {
    let bookmarks = db.bookmarks(&BookmarkFilter::default())?;
    for bookmark in &bookmarks {
        for line in bookmark_lines(bookmark) {
            log::info!("{}", line);
        }
    }
    log::debug!("{} bookmark(s) shown", bookmarks.len());
    Ok(())
}
