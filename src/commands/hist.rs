use crate::core::{error::Result, print_info, Session};

/// Print the history window around the cursor. Read-only.
///
/// Rows show the 1-based absolute position; the cursor row is marked `*`.
pub fn execute_hist(before: usize, after: usize) -> Result<()> {
    let session = Session::open()?;
    let rows = session.state.history.window(before, after);

    if rows.is_empty() {
        print_info("History is empty. Use 'gdir go <key>' first.");
        return Ok(());
    }

    let position_width = rows
        .iter()
        .map(|r| r.position.to_string().len())
        .max()
        .unwrap_or(1);

    for row in rows {
        let marker = if row.is_cursor { '*' } else { ' ' };
        println!(
            "{marker} {:>pw$}  {}",
            row.position,
            row.path.display(),
            pw = position_width,
        );
    }

    Ok(())
}
