//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "scrollpanel";
const APPLICATION: &str = "scrollpanel";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Where logs go.
///
/// - Linux: `$XDG_CACHE_HOME/scrollpanel` or `~/.cache/scrollpanel`
/// - macOS: `~/Library/Caches/dev.scrollpanel.scrollpanel`
/// - Windows: `C:\Users\<User>\AppData\Local\scrollpanel\scrollpanel\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Where `settings.toml` is looked up when no path is given.
///
/// - Linux: `$XDG_CONFIG_HOME/scrollpanel` or `~/.config/scrollpanel`
/// - macOS: `~/Library/Application Support/dev.scrollpanel.scrollpanel`
/// - Windows: `C:\Users\<User>\AppData\Roaming\scrollpanel\scrollpanel\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.toml"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous `latest.log` under a timestamp and prune old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{timestamp}.log")));
    }

    prune_logs(&cache, MAX_OLD_LOGS);
}

/// Delete the oldest archived logs in `dir` until at most `keep` remain.
fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    let excess = logs.len().saturating_sub(keep);
    for entry in logs.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}
