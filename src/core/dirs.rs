use crate::core::error::{GdirError, Result};
use std::path::PathBuf;

/// Environment override for the config directory, used for test isolation.
pub const CONFIG_DIR_ENV: &str = "GDIR_CONFIG_DIR";

/// Resolve the directory holding the persistent state file.
///
/// `GDIR_CONFIG_DIR` takes precedence when set; otherwise the per-OS
/// config base joined with `gdir`.
pub fn config_directory() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_default()
                    .join(".config")
            }),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        "windows" => dirs::config_dir().unwrap_or_default(),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    if base.as_os_str().is_empty() {
        return Err(GdirError::ConfigDirNotFound);
    }

    Ok(base.join("gdir"))
}
