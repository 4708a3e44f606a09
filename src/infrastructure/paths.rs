//! Path helpers for the Zellij sandbox environment.
//!
//! Inside the sandbox the host's home directory is reachable under `/host`.
//! These helpers resolve the plugin's data directory and user-supplied
//! configuration paths against that mount.

use std::path::PathBuf;

/// Sandbox mount point of the host's home directory.
const HOST_ROOT: &str = "/host";

/// Returns the data directory used for trace files.
///
/// The directory is `/host/.local/share/zellij/transaction-processor`, which
/// maps to `~/.local/share/zellij/transaction-processor` when Zellij was
/// started from the user's home directory.
///
/// # Examples
///
/// ```
/// use transaction_processor::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/transaction-processor"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("transaction-processor")
}

/// Expands a leading `~` to the `/host` prefix.
///
/// Only `~` on its own or followed by `/` is expanded; `~user` forms and
/// paths without a tilde are returned unchanged.
///
/// # Examples
///
/// ```
/// use transaction_processor::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}
