// Profile statistics module.
// Snapshot model, derivation from upstream data, and the cache-or-refresh manager.

#![allow(dead_code, unused_imports)]

pub mod clock;
pub mod derive;
pub mod manager;
pub mod snapshot;
pub mod source;

pub use clock::{Clock, SystemClock};
pub use derive::derive_snapshot;
pub use manager::{DisplayedStats, RefreshOutcome, SnapshotOrigin, StatsHandle, StatsManager};
pub use snapshot::{ContributionDay, ProfileStatsSnapshot, RepoCount};
pub use source::StatsSource;
