use crate::core::{error::Result, GdirError, Selector, Session};

/// Resolve a bookmark and print its path for the calling shell.
///
/// The directory is re-checked at go-time: it may have been deleted since
/// it was bookmarked, and a stale target is a recoverable error, not a
/// reason to corrupt history. Only a successful visit is persisted.
pub fn execute_go(selector: &str) -> Result<()> {
    let mut session = Session::open()?;

    let selector = Selector::parse(selector);
    let path = session.state.bookmarks.resolve(&selector)?.path.clone();

    if !path.is_dir() {
        return Err(GdirError::stale_entry(path));
    }

    session.state.history.visit(path.clone());
    session.save()?;

    // The single-line stdout contract: `cd "$(gdir go key)"`.
    println!("{}", path.display());

    Ok(())
}
