// Cache-or-refresh manager for profile statistics.
// Shows the seed immediately, then upgrades to cached or freshly fetched data.

use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, KeyValueStore, STATS_TTL, read_entry, write_entry};
use crate::error::{ErrorKind, Result};

use super::clock::{Clock, SystemClock};
use super::derive::derive_snapshot;
use super::snapshot::ProfileStatsSnapshot;
use super::source::StatsSource;

/// Where the displayed snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOrigin {
    Seed,
    Cache,
    Refresh,
}

impl SnapshotOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            SnapshotOrigin::Seed => "seed",
            SnapshotOrigin::Cache => "cached",
            SnapshotOrigin::Refresh => "live",
        }
    }
}

/// Value published to the display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedStats {
    pub snapshot: ProfileStatsSnapshot,
    pub origin: SnapshotOrigin,
}

/// Terminal state of one load-or-refresh pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A fresh cache entry was displayed; no requests were made.
    CacheHit,
    /// Both sources answered and the derived snapshot was displayed.
    Refreshed,
    /// The refresh failed; the seed stays on display.
    Abandoned(ErrorKind),
    /// The display went away before the result could be shown.
    Discarded,
}

/// What `initialize` hands to the display.
pub struct StatsHandle {
    /// Current snapshot; changes at most once after the seed.
    pub stats: watch::Receiver<DisplayedStats>,
    /// Background load-or-refresh pass.
    pub task: JoinHandle<RefreshOutcome>,
}

/// Produces the snapshot to display, preferring a fresh cached value.
pub struct StatsManager<S, F, C = SystemClock> {
    store: Arc<S>,
    source: Arc<F>,
    clock: Arc<C>,
    ttl: Duration,
}

impl<S, F, C> Clone for StatsManager<S, F, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            source: Arc::clone(&self.source),
            clock: Arc::clone(&self.clock),
            ttl: self.ttl,
        }
    }
}

impl<S, F, C> StatsManager<S, F, C>
where
    S: KeyValueStore + 'static,
    F: StatsSource + 'static,
    C: Clock + 'static,
{
    pub fn new(store: Arc<S>, source: Arc<F>, clock: C) -> Self {
        Self {
            store,
            source,
            clock: Arc::new(clock),
            ttl: STATS_TTL,
        }
    }

    /// Publish `seed` right away and start the background load-or-refresh.
    /// Must be called from within a Tokio runtime.
    pub fn initialize(&self, identity: &str, seed: ProfileStatsSnapshot) -> StatsHandle {
        let seed = seed.normalized();
        let (display, stats) = watch::channel(DisplayedStats {
            snapshot: seed.clone(),
            origin: SnapshotOrigin::Seed,
        });

        let manager = self.clone();
        let identity = identity.to_string();
        let task =
            tokio::spawn(async move { manager.load_or_refresh(&identity, &seed, &display).await });

        StatsHandle { stats, task }
    }

    /// Serve a fresh cache entry, or fetch both sources and commit the result.
    pub async fn load_or_refresh(
        &self,
        identity: &str,
        seed: &ProfileStatsSnapshot,
        display: &watch::Sender<DisplayedStats>,
    ) -> RefreshOutcome {
        match read_entry(self.store.as_ref(), identity) {
            Ok(Some(entry)) if entry.is_fresh(self.clock.now(), self.ttl) => {
                debug!(identity, "serving cached stats");
                return self.commit(display, entry.data.normalized(), SnapshotOrigin::Cache);
            }
            Ok(Some(_)) => debug!(identity, "cached stats are stale"),
            Ok(None) => debug!(identity, "no cached stats"),
            Err(e) => warn!(identity, error = %e, "ignoring unreadable cache entry"),
        }

        match self.refresh(identity, seed).await {
            Ok(snapshot) => {
                info!(
                    identity,
                    total = snapshot.total_contributions,
                    years = snapshot.years_active,
                    "stats refreshed"
                );
                self.commit(display, snapshot, SnapshotOrigin::Refresh)
            }
            Err(e) => {
                warn!(identity, kind = ?e.kind(), error = %e, "stats refresh abandoned");
                RefreshOutcome::Abandoned(e.kind())
            }
        }
    }

    /// Fetch both sources together, derive, and persist.
    async fn refresh(
        &self,
        identity: &str,
        seed: &ProfileStatsSnapshot,
    ) -> Result<ProfileStatsSnapshot> {
        let (profile, history) = tokio::try_join!(
            self.source.profile(identity),
            self.source.contributions(identity)
        )?;

        let now = self.clock.now();
        let snapshot = derive_snapshot(identity, seed, &profile, &history, now.year())?;

        if let Err(e) = write_entry(self.store.as_ref(), &CacheEntry::new(snapshot.clone(), now)) {
            warn!(identity, error = %e, "failed to persist refreshed stats");
        }

        Ok(snapshot)
    }

    /// Replace the displayed value unless the display is gone.
    /// A refreshed value is never replaced by a cached or seed one.
    fn commit(
        &self,
        display: &watch::Sender<DisplayedStats>,
        snapshot: ProfileStatsSnapshot,
        origin: SnapshotOrigin,
    ) -> RefreshOutcome {
        if display.is_closed() {
            debug!(identity = %snapshot.identity, "display closed, discarding stats");
            return RefreshOutcome::Discarded;
        }

        display.send_if_modified(|current| {
            if current.origin == SnapshotOrigin::Refresh && origin != SnapshotOrigin::Refresh {
                return false;
            }
            *current = DisplayedStats { snapshot, origin };
            true
        });

        match origin {
            SnapshotOrigin::Refresh => RefreshOutcome::Refreshed,
            _ => RefreshOutcome::CacheHit,
        }
    }
}
