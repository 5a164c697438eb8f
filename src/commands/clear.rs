use crate::core::{error::Result, print_success, GdirError, Session};
use std::io::{BufRead, IsTerminal, Write};

/// Remove every bookmark and wipe the history ("reset everything").
///
/// Destructive, so it asks for confirmation on a controlling terminal
/// unless `--yes` was given. Without a terminal and without `--yes` it
/// refuses rather than guessing.
pub fn execute_clear(assume_yes: bool) -> Result<()> {
    let mut session = Session::open()?;

    if !assume_yes && !confirm(session.state.bookmarks.len(), session.state.history.len())? {
        return Err(GdirError::ClearAborted);
    }

    session.state.bookmarks.clear();
    session.state.history.clear();
    session.save()?;

    print_success("Cleared all bookmarks and history");

    Ok(())
}

/// Prompt on stderr, read one line from stdin. Errors when stdin is not a
/// terminal (a pipeline can't answer a prompt).
fn confirm(bookmark_count: usize, history_count: usize) -> Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Err(GdirError::ConfirmationUnavailable);
    }

    eprint!(
        "Remove {bookmark_count} bookmark(s) and {history_count} history entr(ies)? [y/N] "
    );
    std::io::stderr().flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}
