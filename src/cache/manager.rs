// Cache manager.
// Decides once per run whether the snapshot is usable, refreshes it if stale,
// and is the only place remote data is fetched for the snapshot.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::github::GitHubClient;

use super::snapshot::{Freshness, Snapshot};
use super::store;

pub struct CacheManager {
    path: PathBuf,
    username: String,
    freshness_window: Duration,
    client: GitHubClient,
}

impl CacheManager {
    pub fn new(config: &LauncherConfig, client: GitHubClient) -> Self {
        Self {
            path: config.snapshot_path.clone(),
            username: config.username.clone(),
            freshness_window: config.freshness_window,
            client,
        }
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    /// Produce a snapshot fresh enough to render, refreshing at most once.
    ///
    /// A missing file is replaced by the bootstrap shell and reported as
    /// `MissingSnapshot`; the next run will then refresh it.
    pub async fn load(&self, now: DateTime<Utc>) -> Result<Snapshot> {
        let Some(snapshot) = store::read_snapshot(&self.path)? else {
            store::write_bootstrap(&self.path)?;
            return Err(LauncherError::MissingSnapshot {
                path: self.path.clone(),
            });
        };

        let age_minutes = snapshot.age_secs(now) as f64 / 60.0;
        match snapshot.freshness(now, self.freshness_window) {
            Freshness::Fresh => {
                tracing::info!("Using ({:.2} minutes) old data...", age_minutes);
                Ok(snapshot)
            }
            Freshness::Stale => {
                tracing::info!("Updating ({:.2} minutes) old data...", age_minutes);
                let refreshed = self.refresh(snapshot, now).await?;
                store::write_snapshot(&self.path, &refreshed)?;
                Ok(refreshed)
            }
        }
    }

    /// Fetch the profile, then its repository list. Nothing is written here.
    async fn refresh(&self, snapshot: Snapshot, now: DateTime<Utc>) -> Result<Snapshot> {
        let user = self.client.get_user(&self.username).await?;
        tracing::info!("Successfully loaded {}'s data.", self.username);

        let repos = self.client.get_repos(&user.repos_url).await?;
        tracing::debug!(count = repos.len(), "repositories fetched");

        Ok(snapshot.refreshed(user, repos, now))
    }
}
