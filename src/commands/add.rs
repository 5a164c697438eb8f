use crate::core::{error::Result, print_success, Session};
use std::path::Path;

/// Bookmark `dir` under `key`, overwriting an existing entry for the key.
///
/// The notice distinguishes "Added" from "Updated" so scripted overwrites
/// stay visible.
pub fn execute_add(key: &str, dir: &Path) -> Result<()> {
    let mut session = Session::open()?;

    let outcome = session.state.bookmarks.add(key, dir)?;
    session.save()?;

    match outcome.replaced {
        Some(ref old) if *old != outcome.path => print_success(&format!(
            "Updated {} -> {} (was {})",
            key.trim(),
            outcome.path.display(),
            old.display()
        )),
        Some(_) => print_success(&format!(
            "Updated {} -> {}",
            key.trim(),
            outcome.path.display()
        )),
        None => print_success(&format!(
            "Added {} -> {}",
            key.trim(),
            outcome.path.display()
        )),
    }

    Ok(())
}
