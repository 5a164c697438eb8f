//! Unified diagnostic formatting for consistent CLI presentation.
//!
//! All human-facing text goes to **stderr**: stdout is reserved for the
//! shell-consumption contract (paths, listings, export lines), so the
//! messages here must never pollute it.
//!
//! # Design Principles
//! - **Consistent color scheme**: red for errors, green for success,
//!   yellow for warnings
//! - **Stable glyphs**: `✕` / `✓` prefixes match the listing style

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ Error:".red(), message.white());
}

/// Formats and prints a success notice with consistent styling
///
/// # Format
/// ```text
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    eprintln!("{}", message.white());
}

/// Formats and prints a warning
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow(), message.white());
}
