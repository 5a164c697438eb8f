//! Browser-style navigation history with a movable cursor.
//!
//! This module defines [`History`], the bounded linear log of visited paths
//! backing the `go`/`back`/`fwd` commands. It behaves like a browser's
//! back/forward stack: visiting a new path after moving backward discards
//! the abandoned forward branch before appending.
//!
//! # Public API
//! - [`History`]: the log itself, serialized as part of the persisted state
//! - [`HistoryRow`]: one row of a display window, flagged at the cursor
//!
//! # Invariants
//! - `cursor` is `None` iff `entries` is empty
//! - `0 <= cursor < entries.len()` whenever entries exist
//! - failed moves leave the cursor untouched

use crate::core::error::{GdirError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound on retained entries; the oldest are dropped past this.
pub const MAX_ENTRIES: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<PathBuf>,
    cursor: Option<usize>,
}

/// One row of a `hist` display window.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow<'a> {
    /// 1-based absolute position within the log.
    pub position: usize,
    pub path: &'a Path,
    pub is_cursor: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly visited path.
    ///
    /// Truncates everything after the cursor first, so a `back` followed by
    /// a fresh visit abandons the old forward branch. The log is bounded at
    /// [`MAX_ENTRIES`]; overflow drops the oldest entries.
    pub fn visit(&mut self, path: PathBuf) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }

        self.entries.push(path);

        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }

        self.cursor = Some(self.entries.len() - 1);
        log::debug!(
            "history visit: {} entries, cursor at {}",
            self.entries.len(),
            self.entries.len() - 1
        );
    }

    /// Move the cursor backward by `steps` and return the path it lands on.
    pub fn back(&mut self, steps: usize) -> Result<PathBuf> {
        let cursor = self.cursor.ok_or(GdirError::EmptyHistory)?;

        if steps > cursor {
            return Err(GdirError::history_boundary("back", steps));
        }

        self.cursor = Some(cursor - steps);
        Ok(self.entries[cursor - steps].clone())
    }

    /// Move the cursor forward by `steps` and return the path it lands on.
    pub fn forward(&mut self, steps: usize) -> Result<PathBuf> {
        let cursor = self.cursor.ok_or(GdirError::EmptyHistory)?;

        if cursor + steps >= self.entries.len() {
            return Err(GdirError::history_boundary("forward", steps));
        }

        self.cursor = Some(cursor + steps);
        Ok(self.entries[cursor + steps].clone())
    }

    /// Path at the cursor, or `None` while the log is empty.
    pub fn current(&self) -> Option<&Path> {
        self.cursor.map(|i| self.entries[i].as_path())
    }

    /// Slice of the log around the cursor, clamped to the valid range.
    pub fn window(&self, before: usize, after: usize) -> Vec<HistoryRow<'_>> {
        let Some(cursor) = self.cursor else {
            return Vec::new();
        };

        let start = cursor.saturating_sub(before);
        let end = (cursor + after).min(self.entries.len() - 1);

        (start..=end)
            .map(|i| HistoryRow {
                position: i + 1,
                path: self.entries[i].as_path(),
                is_cursor: i == cursor,
            })
            .collect()
    }

    /// Paths immediately before and after the cursor, for the `env` export.
    pub fn neighbors(&self) -> (Option<&Path>, Option<&Path>) {
        let Some(cursor) = self.cursor else {
            return (None, None);
        };

        let prev = cursor
            .checked_sub(1)
            .map(|i| self.entries[i].as_path());
        let next = self.entries.get(cursor + 1).map(PathBuf::as_path);

        (prev, next)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Repair a cursor that no longer points into the log (e.g. after
    /// loading a hand-edited state file). Returns true if anything changed.
    pub fn normalize(&mut self) -> bool {
        match (self.entries.is_empty(), self.cursor) {
            (true, Some(_)) => {
                self.cursor = None;
                true
            }
            (false, None) => {
                self.cursor = Some(self.entries.len() - 1);
                true
            }
            (false, Some(c)) if c >= self.entries.len() => {
                self.cursor = Some(self.entries.len() - 1);
                true
            }
            _ => false,
        }
    }
}
