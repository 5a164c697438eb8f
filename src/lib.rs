//! gdir - directory bookmarks with browser-style history for your shell.
//!
//! This library provides the core functionality for gdir: a persistent
//! keyed bookmark table, a linear navigation history with a movable
//! cursor, and atomic on-disk state, all driven by a thin CLI whose stdout
//! is consumable via shell command substitution.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module,
//! which provides:
//! - The persisted state model (bookmarks + history + cursor)
//! - Bookmark table and selector resolution
//! - The history log state machine
//! - Atomic storage and per-command sessions
//! - Error handling, exit-code classes and stderr formatting

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    env_var_name,
    print_error,
    print_info,
    print_success,
    print_warning,
    sh_quote,

    Bookmark,
    Bookmarks,

    // Error handling
    GdirError,
    History,
    HistoryRow,
    Result,

    // Selector parsing
    Selector,

    Session,
    // State management
    State,
    Store,

    EXIT_INTERNAL_ERROR,
    EXIT_SELECTOR_ERROR,
    EXIT_USAGE_ERROR,
};
