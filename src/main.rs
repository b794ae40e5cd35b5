// Desktop launcher for a GitHub user's Pages sites.
// Loads or refreshes the cached repository list, then opens the launcher window.

mod app;
mod cache;
mod config;
mod error;
mod github;
mod ui;

use std::process::ExitCode;

use chrono::Utc;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::app::LauncherContext;
use crate::cache::CacheManager;
use crate::config::LauncherConfig;
use crate::error::Result;
use crate::github::GitHubClient;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .init();

    match run(LauncherConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e.report());
            e.exit_code()
        }
    }
}

fn run(config: LauncherConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let client = GitHubClient::new(&config.api_base, config.request_timeout)?;
    let manager = CacheManager::new(&config, client);

    let snapshot = runtime.block_on(manager.load(Utc::now()))?;
    let context =
        LauncherContext::from_snapshot(&config.username, &snapshot, &config.snapshot_path)?;

    let avatar_bytes = runtime.block_on(manager.client().get_avatar(&context.avatar_url))?;
    let avatar = app::decode_avatar(&avatar_bytes)?;

    app::run(context, avatar)
}
