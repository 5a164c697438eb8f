//! Keyed bookmark table with stable ordinal addressing.
//!
//! This module defines [`Bookmark`] and [`Bookmarks`], the associative store
//! behind `add`/`rm`/`list`/`go`. Entries are addressed either by exact key
//! or by their 1-based position in the sorted-by-key listing, so ordinals
//! shown by `list` are always valid selectors for the next command.
//!
//! # Policies
//! - duplicate keys overwrite the existing entry (idempotent scripting use)
//! - numeric keys are rejected so ordinals can never be shadowed
//! - paths are canonicalized at add time and must exist on disk

use crate::core::error::{GdirError, Result};
use crate::core::selector::{is_numeric, Selector};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub key: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks {
    entries: Vec<Bookmark>,
}

/// Result of an `add`, so the caller can word its notice.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub path: PathBuf,
    /// Path the key pointed at before, when an existing entry was replaced.
    pub replaced: Option<PathBuf>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the bookmark for `key`, pointing at the
    /// canonical form of `dir`.
    ///
    /// The directory must exist at add time; `go` re-checks again later
    /// since it may vanish in between.
    pub fn add(&mut self, key: &str, dir: &Path) -> Result<AddOutcome> {
        let key = key.trim();
        if key.is_empty() {
            return Err(GdirError::EmptyKey);
        }
        if is_numeric(key) {
            return Err(GdirError::numeric_key(key));
        }

        let path = canonicalize_dir(dir)?;

        if let Some(existing) = self.entries.iter_mut().find(|b| b.key == key) {
            let replaced = std::mem::replace(&mut existing.path, path.clone());
            log::debug!("bookmark '{key}' overwritten: {} -> {}", replaced.display(), path.display());
            return Ok(AddOutcome {
                path,
                replaced: Some(replaced),
            });
        }

        self.entries.push(Bookmark {
            key: key.to_string(),
            path: path.clone(),
        });
        log::debug!("bookmark '{key}' added -> {}", path.display());

        Ok(AddOutcome {
            path,
            replaced: None,
        })
    }

    /// Remove the bookmark named by `selector`, returning the removed entry.
    pub fn remove(&mut self, selector: &Selector) -> Result<Bookmark> {
        let pos = self.position_of(selector)?;
        Ok(self.entries.remove(pos))
    }

    /// Shared selector lookup used by `go`, `rm` and friends.
    pub fn resolve(&self, selector: &Selector) -> Result<&Bookmark> {
        let pos = self.position_of(selector)?;
        Ok(&self.entries[pos])
    }

    /// Index into the backing vec for a selector. Ordinals address the
    /// sorted-by-key listing, not insertion order.
    fn position_of(&self, selector: &Selector) -> Result<usize> {
        if self.entries.is_empty() {
            return Err(GdirError::NoBookmarks);
        }

        match selector {
            Selector::Key(key) => self
                .entries
                .iter()
                .position(|b| &b.key == key)
                .ok_or_else(|| GdirError::unknown_key(key)),
            Selector::Ordinal(0) => Err(GdirError::ZeroIndex),
            Selector::Ordinal(ordinal) => {
                let mut order: Vec<usize> = (0..self.entries.len()).collect();
                order.sort_by(|&a, &b| self.entries[a].key.cmp(&self.entries[b].key));
                order
                    .get(ordinal - 1)
                    .copied()
                    .ok_or_else(|| GdirError::index_out_of_range(*ordinal, self.entries.len()))
            }
        }
    }

    /// Entries sorted by key; the listing order ordinals refer to.
    pub fn sorted(&self) -> Vec<&Bookmark> {
        let mut sorted: Vec<&Bookmark> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.key.cmp(&b.key));
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Canonicalize `dir` and require it to be an existing directory.
pub fn canonicalize_dir(dir: &Path) -> Result<PathBuf> {
    let path = std::fs::canonicalize(dir)
        .map_err(|_| GdirError::target_not_found(dir))?;
    if !path.is_dir() {
        return Err(GdirError::not_a_directory(dir));
    }
    Ok(path)
}
