//! Platform directory resolution and user path expansion.
//!
//! Locations follow the platform conventions reported by `dirs`
//! (`~/.local/share` and `~/.config` on Linux, `~/Library/...` on macOS,
//! `%APPDATA%` on Windows). When the platform reports nothing, the current
//! directory is used so the dashboard still starts.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "ragdesk";
const CONFIG_FILE: &str = "config.toml";

/// Returns the directory holding ragdesk's trace files.
///
/// # Examples
///
/// ```
/// use ragdesk::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("ragdesk"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Returns the default configuration file path, `<config dir>/ragdesk/config.toml`.
#[must_use]
pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or with `~user` forms, are returned
/// unchanged, as is everything when no home directory is known.
///
/// # Examples
///
/// ```
/// use ragdesk::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };
    expand_tilde_with(path, &home)
}

fn expand_tilde_with(path: &str, home: &Path) -> String {
    if path == "~" {
        home.display().to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).display().to_string()
    } else {
        path.to_string()
    }
}
