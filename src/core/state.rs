//! The persisted unit of state: bookmarks, history, cursor.
//!
//! [`State`] is what the storage layer writes to disk as one JSON document.
//! History entries are plain path strings, not references into the bookmark
//! table; deleting a bookmark never invalidates history.
//!
//! Every field carries `#[serde(default)]` so a partially-valid file still
//! loads instead of being discarded wholesale.

use crate::core::bookmarks::Bookmarks;
use crate::core::history::History;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub bookmarks: Bookmarks,
    #[serde(default)]
    pub history: History,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            bookmarks: Bookmarks::new(),
            history: History::new(),
            updated_at: Utc::now(),
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }
}
