//! Durable, atomic persistence of the navigator state.
//!
//! [`Store`] owns the on-disk representation: a single pretty-printed JSON
//! file under the per-user config directory. Saves go through a temporary
//! file in the same directory followed by a rename, so a subsequent load
//! never observes a partial write even if two invocations race.
//!
//! [`Session`] bundles a store with its loaded [`State`] for the duration of
//! one command: load once, mutate, save once on the mutation paths.
//!
//! # Failure policy
//! - missing file: empty state (first run)
//! - unreadable/unparsable file: warn and reset to empty state
//! - any save failure: fatal for the invocation (internal-error exit class)

use crate::core::dirs::config_directory;
use crate::core::error::{GdirError, Result};
use crate::core::state::State;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.json";
const STATE_TMP_FILE: &str = "state.json.tmp";

pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store at the resolved config directory, creating it if
    /// absent.
    pub fn open() -> Result<Self> {
        Self::open_at(&config_directory()?)
    }

    /// Open the store at an explicit directory (tests point this at a
    /// temp dir).
    pub fn open_at(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .map_err(|e| GdirError::config_dir_creation_failed(dir, e))?;
        log::debug!("store opened at {}", dir.display());
        Ok(Store {
            dir: dir.to_path_buf(),
        })
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    /// Load the persisted state. Never fails: absence means first run,
    /// corruption resets to empty rather than refusing to run.
    pub fn load(&self) -> State {
        let path = self.state_path();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no state file at {}, starting empty", path.display());
                return State::new();
            }
            Err(e) => {
                log::warn!("could not read state file '{}': {e}; resetting", path.display());
                return State::new();
            }
        };

        match serde_json::from_str::<State>(&content) {
            Ok(mut state) => {
                if state.history.normalize() {
                    log::warn!("state file '{}' had an invalid cursor; repaired", path.display());
                }
                state
            }
            Err(e) => {
                log::warn!("corrupt state file '{}': {e}; resetting", path.display());
                State::new()
            }
        }
    }

    /// Persist `state` atomically: write a sibling temp file, then rename
    /// it over the real path.
    pub fn save(&self, state: &State) -> Result<()> {
        let path = self.state_path();
        let tmp_path = self.dir.join(STATE_TMP_FILE);

        let json = serde_json::to_string_pretty(state)
            .map_err(GdirError::state_serialization_failed)?;

        fs::write(&tmp_path, json)
            .map_err(|e| GdirError::state_write_failed(&tmp_path, e))?;

        fs::rename(&tmp_path, &path)
            .map_err(|e| GdirError::state_replace_failed(&path, e))?;

        log::debug!(
            "saved {} bookmark(s), {} history entr(ies) to {}",
            state.bookmarks.len(),
            state.history.len(),
            path.display()
        );
        Ok(())
    }
}

/// One command's view of the world: the store plus its loaded state.
pub struct Session {
    store: Store,
    pub state: State,
}

impl Session {
    pub fn open() -> Result<Self> {
        let store = Store::open()?;
        let state = store.load();
        Ok(Session { store, state })
    }

    pub fn open_at(dir: &Path) -> Result<Self> {
        let store = Store::open_at(dir)?;
        let state = store.load();
        Ok(Session { store, state })
    }

    /// Persist the mutated state, refreshing its timestamp.
    pub fn save(&mut self) -> Result<()> {
        self.state.updated_at = Utc::now();
        self.store.save(&self.state)
    }
}
