use crate::core::{error::Result, print_success, Selector, Session};

/// Remove a bookmark by key or 1-based listing position.
pub fn execute_rm(selector: &str) -> Result<()> {
    let mut session = Session::open()?;

    let selector = Selector::parse(selector);
    let removed = session.state.bookmarks.remove(&selector)?;
    session.save()?;

    print_success(&format!(
        "Removed {} -> {}",
        removed.key,
        removed.path.display()
    ));

    Ok(())
}
