//! Domain-specific error types and exit-code classification.
//!
//! This module defines [`GdirError`] which covers every failure mode of the
//! gdir CLI. It uses `thiserror` for ergonomic error definitions and includes
//! specialized constructors for the parameterized variants.
//!
//! # Public API
//! - [`GdirError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GdirError>`
//! - Exit-code constants for the three non-zero exit classes
//!
//! # Error Categories
//! - **Selector errors**: unknown key/index, empty or numeric keys
//! - **History errors**: boundary violations, empty history, stale entries
//! - **State errors**: config directory and state-file I/O, serialization
//!
//! Callers branch on the exit code, so every variant maps onto exactly one
//! class via [`GdirError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for recoverable user errors (bad selector, boundary, stale dir).
pub const EXIT_SELECTOR_ERROR: i32 = 1;
/// Exit code clap uses for command-line usage errors.
pub const EXIT_USAGE_ERROR: i32 = 2;
/// Exit code for unexpected internal failures (I/O, serialization).
pub const EXIT_INTERNAL_ERROR: i32 = 3;

/// Domain-specific error types for gdir
#[derive(Error, Debug)]
pub enum GdirError {
    // Bookmark table errors
    #[error("Bookmark key must not be empty")]
    EmptyKey,

    #[error("Bookmark key must not be a number: '{key}' (numbers select by position)")]
    NumericKey { key: String },

    #[error("Directory does not exist: {path}")]
    TargetNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("No bookmark matches '{selector}'")]
    UnknownKey { selector: String },

    #[error("Index must be positive (got 0)")]
    ZeroIndex,

    #[error("Index {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("No bookmarks saved yet. Use 'gdir add <key> <dir>' first.")]
    NoBookmarks,

    // History errors
    #[error("History is empty. Use 'gdir go <key>' first.")]
    EmptyHistory,

    #[error("History boundary: cannot move {direction} by {steps}")]
    HistoryBoundary { direction: &'static str, steps: usize },

    #[error("Directory no longer exists: {path}")]
    StaleEntry { path: PathBuf },

    // Interactive confirmation
    #[error("Aborted: nothing cleared")]
    ClearAborted,

    #[error("Refusing to clear without --yes (no terminal to confirm on)")]
    ConfirmationUnavailable,

    // State persistence errors
    #[error("Could not determine config directory")]
    ConfigDirNotFound,

    #[error("Failed to create config directory '{path}': {source}")]
    ConfigDirCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize state: {source}")]
    StateSerializationFailed { source: serde_json::Error },

    #[error("Failed to write state file '{path}': {source}")]
    StateWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to replace state file '{path}': {source}")]
    StateReplaceFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using GdirError
pub type Result<T> = std::result::Result<T, GdirError>;

impl GdirError {
    /// Create a numeric key error
    pub fn numeric_key(key: impl Into<String>) -> Self {
        Self::NumericKey { key: key.into() }
    }

    /// Create a target not found error
    pub fn target_not_found(path: impl Into<PathBuf>) -> Self {
        Self::TargetNotFound { path: path.into() }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create an unknown key/selector error
    pub fn unknown_key(selector: impl Into<String>) -> Self {
        Self::UnknownKey {
            selector: selector.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create a history boundary error
    pub fn history_boundary(direction: &'static str, steps: usize) -> Self {
        Self::HistoryBoundary { direction, steps }
    }

    /// Create a stale history entry error
    pub fn stale_entry(path: impl Into<PathBuf>) -> Self {
        Self::StaleEntry { path: path.into() }
    }

    /// Create a config directory creation failed error
    pub fn config_dir_creation_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigDirCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state serialization failed error
    pub fn state_serialization_failed(source: serde_json::Error) -> Self {
        Self::StateSerializationFailed { source }
    }

    /// Create a state write failed error
    pub fn state_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a state replace failed error
    pub fn state_replace_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StateReplaceFailed {
            path: path.into(),
            source,
        }
    }

    /// Map this error onto one of the documented non-zero exit classes.
    ///
    /// Usage errors never reach here (clap exits with
    /// [`EXIT_USAGE_ERROR`] before dispatch).
    pub fn exit_code(&self) -> i32 {
        match self {
            GdirError::EmptyKey
            | GdirError::NumericKey { .. }
            | GdirError::TargetNotFound { .. }
            | GdirError::NotADirectory { .. }
            | GdirError::UnknownKey { .. }
            | GdirError::ZeroIndex
            | GdirError::IndexOutOfRange { .. }
            | GdirError::NoBookmarks
            | GdirError::EmptyHistory
            | GdirError::HistoryBoundary { .. }
            | GdirError::StaleEntry { .. }
            | GdirError::ClearAborted
            | GdirError::ConfirmationUnavailable => EXIT_SELECTOR_ERROR,

            GdirError::ConfigDirNotFound
            | GdirError::ConfigDirCreationFailed { .. }
            | GdirError::StateSerializationFailed { .. }
            | GdirError::StateWriteFailed { .. }
            | GdirError::StateReplaceFailed { .. }
            | GdirError::Io(_) => EXIT_INTERNAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GdirError::EmptyKey;
        assert_eq!(err.to_string(), "Bookmark key must not be empty");
    }

    #[test]
    fn test_target_not_found_error() {
        let err = GdirError::target_not_found("/no/such/dir");
        assert_eq!(err.to_string(), "Directory does not exist: /no/such/dir");
    }

    #[test]
    fn test_unknown_key_error() {
        let err = GdirError::unknown_key("proj");
        assert_eq!(err.to_string(), "No bookmark matches 'proj'");
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = GdirError::index_out_of_range(5, 3);
        assert_eq!(err.to_string(), "Index 5 is out of range (1-3 available)");
    }

    #[test]
    fn test_history_boundary_error() {
        let err = GdirError::history_boundary("back", 2);
        assert_eq!(err.to_string(), "History boundary: cannot move back by 2");
    }

    #[test]
    fn test_numeric_key_error() {
        let err = GdirError::numeric_key("42");
        assert!(err.to_string().contains("'42'"));
    }

    #[test]
    fn test_selector_errors_share_exit_code() {
        assert_eq!(GdirError::EmptyKey.exit_code(), EXIT_SELECTOR_ERROR);
        assert_eq!(GdirError::unknown_key("x").exit_code(), EXIT_SELECTOR_ERROR);
        assert_eq!(
            GdirError::history_boundary("forward", 1).exit_code(),
            EXIT_SELECTOR_ERROR
        );
        assert_eq!(
            GdirError::stale_entry("/gone").exit_code(),
            EXIT_SELECTOR_ERROR
        );
    }

    #[test]
    fn test_internal_errors_share_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            GdirError::state_write_failed("/cfg/state.json", io_err).exit_code(),
            EXIT_INTERNAL_ERROR
        );
        assert_eq!(GdirError::ConfigDirNotFound.exit_code(), EXIT_INTERNAL_ERROR);
    }

    #[test]
    fn test_state_replace_failed() {
        let io_err = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "no space left");
        let err = GdirError::state_replace_failed("/cfg/state.json", io_err);
        assert!(err.to_string().contains("/cfg/state.json"));
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn test_state_serialization_failed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = GdirError::state_serialization_failed(parse_err);
        assert!(err.to_string().contains("Failed to serialize state"));
    }
}
