use crate::core::{env_var_name, error::Result, sh_quote, Session};

/// Print shell-evaluable export lines for the cursor's neighbors. Read-only.
///
/// `PREV`/`NEXT` are always emitted (empty when absent) so an
/// `eval "$(gdir env)"` clears stale values from a previous position. With
/// `all`, one `GDIR_<KEY>` export per bookmark follows.
pub fn execute_env(all: bool) -> Result<()> {
    let session = Session::open()?;

    let (prev, next) = session.state.history.neighbors();
    println!(
        "export PREV={}",
        sh_quote(&prev.map(|p| p.display().to_string()).unwrap_or_default())
    );
    println!(
        "export NEXT={}",
        sh_quote(&next.map(|p| p.display().to_string()).unwrap_or_default())
    );

    if all {
        for bookmark in session.state.bookmarks.sorted() {
            println!(
                "export {}={}",
                env_var_name(&bookmark.key),
                sh_quote(&bookmark.path.display().to_string())
            );
        }
    }

    Ok(())
}
