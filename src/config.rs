// Runtime configuration.
// Read from environment variables, with the identity optionally given on the command line.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::cache::paths;
use crate::error::{Result, StatsError};
use crate::stats::ProfileStatsSnapshot;

const DEFAULT_PROFILE_API: &str = "https://api.github.com";
const DEFAULT_CONTRIBUTIONS_API: &str = "https://github-contributions-api.jogruber.de/v4";

#[derive(Debug, Clone)]
pub struct Config {
    /// Account handle used as cache key and upstream parameter.
    pub identity: String,
    pub github_token: Option<String>,
    pub profile_api: String,
    pub contributions_api: String,
    /// Base directory for the store and the log file.
    pub cache_dir: Option<PathBuf>,
    /// JSON snapshot shown before any cached or live data.
    pub seed_path: Option<PathBuf>,
    /// Print the final snapshot as JSON instead of running the terminal UI.
    pub print: bool,
}

/// Command-line arguments.
#[derive(Debug, Default, Parser)]
#[command(name = "folio-stats")]
#[command(version, about = "Cached GitHub profile statistics", long_about = None)]
pub struct Args {
    /// Account handle; overrides FOLIO_IDENTITY
    pub identity: Option<String>,

    /// Print the snapshot as JSON instead of opening the terminal UI
    #[arg(long)]
    pub print: bool,
}

/// Accept only handles made of ASCII letters, digits, and hyphens.
pub fn validate_identity(identity: &str) -> Result<()> {
    let valid = !identity.is_empty()
        && identity
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StatsError::Config(format!(
            "invalid identity {:?}: use letters, digits, and hyphens",
            identity
        )))
    }
}

impl Config {
    /// Load from the process environment and command-line arguments.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), Args::parse())
    }

    /// Load from an arbitrary variable lookup and parsed arguments.
    pub fn from_lookup<L>(lookup: L, args: Args) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let identity = args
            .identity
            .or_else(|| var("FOLIO_IDENTITY"))
            .ok_or_else(|| {
                StatsError::Config("no identity: pass one or set FOLIO_IDENTITY".to_string())
            })?;
        validate_identity(&identity)?;

        Ok(Self {
            identity,
            github_token: var("GITHUB_TOKEN"),
            profile_api: var("FOLIO_PROFILE_API").unwrap_or_else(|| DEFAULT_PROFILE_API.into()),
            contributions_api: var("FOLIO_CONTRIBUTIONS_API")
                .unwrap_or_else(|| DEFAULT_CONTRIBUTIONS_API.into()),
            cache_dir: var("FOLIO_CACHE_DIR")
                .map(PathBuf::from)
                .or_else(paths::cache_dir),
            seed_path: var("FOLIO_SEED").map(PathBuf::from),
            print: args.print,
        })
    }

    /// The seed snapshot: the configured seed file, or an empty snapshot.
    pub fn load_seed(&self) -> Result<ProfileStatsSnapshot> {
        let Some(path) = &self.seed_path else {
            return Ok(ProfileStatsSnapshot::empty(&self.identity));
        };

        let contents = fs::read_to_string(path)?;
        let mut seed: ProfileStatsSnapshot = serde_json::from_str(&contents)?;
        if seed.identity != self.identity {
            seed.identity = self.identity.clone();
        }
        Ok(seed.normalized())
    }
}
