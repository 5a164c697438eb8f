use crate::core::{error::Result, print_info, Session};

/// Print the bookmark listing: 1-based ordinal, key, absolute path.
///
/// Rows go to stdout (the listing is the command's payload); the empty-table
/// notice goes to stderr so piping an empty listing stays clean.
pub fn execute_list() -> Result<()> {
    let session = Session::open()?;
    let sorted = session.state.bookmarks.sorted();

    if sorted.is_empty() {
        print_info("No bookmarks saved yet. Use 'gdir add <key> <dir>' first.");
        return Ok(());
    }

    let ordinal_width = sorted.len().to_string().len();
    let key_width = sorted.iter().map(|b| b.key.len()).max().unwrap_or(0);

    for (i, bookmark) in sorted.iter().enumerate() {
        println!(
            "{:>ow$}  {:<kw$}  {}",
            i + 1,
            bookmark.key,
            bookmark.path.display(),
            ow = ordinal_width,
            kw = key_width,
        );
    }

    Ok(())
}
