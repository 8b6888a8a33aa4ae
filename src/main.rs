// folio-stats: cached GitHub profile statistics for a portfolio.
// Shows a seed snapshot at once, then upgrades it from cache or upstream.

mod app;
mod cache;
mod config;
mod error;
mod github;
mod stats;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::cache::{FileStore, KeyValueStore, MemoryStore, paths};
use crate::config::Config;
use crate::error::{ErrorKind, Result};
use crate::github::GitHubClient;
use crate::stats::{ProfileStatsSnapshot, RefreshOutcome, StatsHandle, StatsManager, SystemClock};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let seed = config.load_seed()?;
    match &config.cache_dir {
        Some(dir) => {
            let store = Arc::new(FileStore::new(paths::store_dir(dir)));
            run(&config, seed, store).await
        }
        None => {
            warn!("no cache directory available, stats will not persist");
            run(&config, seed, Arc::new(MemoryStore::new())).await
        }
    }
}

/// Route logs to stderr in print mode, otherwise to a file so the TUI stays intact.
fn init_logging(config: &Config) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.print {
        tracing_subscriber::registry()
            .with(filter())
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    } else if let Some(dir) = &config.cache_dir {
        fs::create_dir_all(dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths::log_path(dir))?;
        tracing_subscriber::registry()
            .with(filter())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }

    Ok(())
}

async fn run<S: KeyValueStore + 'static>(
    config: &Config,
    seed: ProfileStatsSnapshot,
    store: Arc<S>,
) -> Result<()> {
    let client = Arc::new(GitHubClient::from_config(config)?);
    let manager = StatsManager::new(store, Arc::clone(&client), SystemClock);
    let StatsHandle { stats, task } = manager.initialize(&config.identity, seed);

    if config.print {
        let outcome = task.await.unwrap_or_else(|e| {
            warn!(error = %e, "stats task failed");
            RefreshOutcome::Abandoned(ErrorKind::Other)
        });
        info!(?outcome, remaining = client.rate_limit().remaining, "stats ready");

        let json = serde_json::to_string_pretty(&stats.borrow().snapshot)?;
        println!("{}", json);
        return Ok(());
    }

    let mut terminal = ratatui::init();
    let mut app = App::new(stats);
    let result = tokio::task::block_in_place(|| app.run(&mut terminal));
    ratatui::restore();
    result?;

    Ok(())
}
