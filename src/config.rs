// Launcher configuration.
// Fixed defaults for the user, API endpoint, and snapshot location.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::FRESHNESS_WINDOW;
use crate::github::GITHUB_API_BASE;

/// GitHub account whose repositories are listed.
pub const DEFAULT_USERNAME: &str = "Vianpyro";

/// Snapshot file, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "save.json";

/// Upper bound on each HTTP request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub username: String,
    pub api_base: String,
    pub snapshot_path: PathBuf,
    /// Age after which the snapshot is refreshed.
    pub freshness_window: Duration,
    pub request_timeout: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            api_base: GITHUB_API_BASE.to_string(),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            freshness_window: FRESHNESS_WINDOW,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
