//! Core functionality for the gdir tool.
//!
//! This module provides the fundamental building blocks: the persisted
//! state model, bookmark table, history log, storage layer, error handling
//! and output formatting.

pub mod bookmarks;
pub mod dirs;
pub mod error;
pub mod history;
pub mod output;
pub mod selector;
pub mod shell;
pub mod state;
pub mod store;

// === Error handling ===
// Core error type, result alias and exit-code classes
pub use error::{
    GdirError, Result, EXIT_INTERNAL_ERROR, EXIT_SELECTOR_ERROR, EXIT_USAGE_ERROR,
};

// === State model ===
// The persisted unit: bookmark table + history + cursor
pub use state::State;

// === Bookmark table ===
pub use bookmarks::{Bookmark, Bookmarks};

// === History log ===
pub use history::{History, HistoryRow};

// === Selector parsing ===
// User input like "proj" or "2" decoded once at the CLI boundary
pub use selector::Selector;

// === Storage ===
// Atomic load/save of the state file, plus the per-command session
pub use store::{Session, Store};

// === Shell integration helpers ===
pub use shell::{env_var_name, sh_quote};

// === Output formatting ===
// Stderr diagnostics; stdout stays reserved for shell consumption
pub use output::{print_error, print_info, print_success, print_warning};
